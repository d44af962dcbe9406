use crate::components::{AnyContainer, ComponentContainer, ComponentId};
use std::hash::{Hash, Hasher};

/// Plain data that can be attached to an [entity](crate::entities::Entity).
///
/// Implement it with #\[derive([`Component`](bitmask_ecs_derive::Component))\],
/// which gives every type its own [ComponentId].
pub trait Component: 'static + Sized {
	fn component_id() -> ComponentId;
}

/// A runtime representation of a type implementing the [`Component`] trait.
#[derive(Clone, Copy)]
pub struct ComponentType {
	id: ComponentId,
	make_container: fn(usize) -> Box<dyn AnyContainer>,
}

impl ComponentType {
	/// Returns the [`ComponentType`] of T.
	pub fn of<T: Component>() -> Self {
		Self {
			id: ComponentId::of::<T>(),
			make_container: |capacity| -> Box<dyn AnyContainer> {
				Box::new(ComponentContainer::<T>::with_capacity(capacity))
			},
		}
	}

	pub const fn id(&self) -> ComponentId {
		self.id
	}

	/// Create an empty container for this type holding at most `capacity` values.
	pub fn make_container(&self, capacity: usize) -> Box<dyn AnyContainer> {
		(self.make_container)(capacity)
	}
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Hash for ComponentType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}
