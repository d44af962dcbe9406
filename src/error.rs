use crate::components::ComponentId;
use crate::entities::Entity;
use thiserror::Error;

pub type EcsResult<T> = Result<T, EcsError>;

/// Everything that can go wrong while operating on an [EntityStore](crate::entities::EntityStore).
///
/// The unchecked store operations panic with the [Display](std::fmt::Display) text of these errors,
/// the `try_*` variants return them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
	#[error("entity capacity exceeded: at most {capacity} entities can be alive")]
	EntityCapacityExceeded { capacity: usize },

	#[error("component capacity exceeded: at most {capacity} component types can be registered")]
	ComponentCapacityExceeded { capacity: usize },

	#[error("entity handles exhausted")]
	HandlesExhausted,

	#[error("the invalid entity handle was used")]
	InvalidEntity,

	#[error("entity {0} has already been destroyed or was never created")]
	StaleEntity(Entity),

	#[error("entity {entity} has no component of type {component}")]
	ComponentNotFound { entity: Entity, component: ComponentId },

	#[error("component type {component} has not been registered")]
	ComponentNotRegistered { component: ComponentId },

	#[error("entity {entity} already has a component of type {component}")]
	DuplicateComponent { entity: Entity, component: ComponentId },

	#[error("a view cannot include component type {component} more than once")]
	DuplicateQueryComponent { component: ComponentId },

	#[error("invalid store configuration: {0}")]
	InvalidConfig(String),
}

/// Turn a failed operation into a panic at the caller's location.
#[track_caller]
#[inline(always)]
pub(crate) fn unwrap_or_panic<T>(result: EcsResult<T>) -> T {
	match result {
		Ok(value) => value,
		Err(error) => panic!("{}", error),
	}
}
