use crate::components::{Component, ComponentContainer, ComponentRegistry, ComponentSet};
use crate::error::{unwrap_or_panic, EcsError, EcsResult};
use crate::entities::{Entity, EntityManager, View};
use crate::data_structures::ComponentMask;
use crate::context::EcsContext;
use crate::config::StoreConfig;

/// A container for [entities](Entity) and their associated [components](Component).
///
/// Every operation comes in two forms. The `try_*` methods report failures as [EcsError]s;
/// the [EcsContext] methods assume the caller upholds their preconditions and panic otherwise.
pub struct EntityStore {
	config: StoreConfig,
	entities: EntityManager,
	registry: ComponentRegistry,
}

impl EntityStore {
	/// Create a store with the default [StoreConfig].
	pub fn new() -> Self {
		Self::from_valid_config(StoreConfig::default())
	}

	/// Create a store with a custom [StoreConfig].
	pub fn with_config(config: StoreConfig) -> EcsResult<Self> {
		config.validate()?;
		Ok(Self::from_valid_config(config))
	}

	fn from_valid_config(config: StoreConfig) -> Self {
		tracing::debug!(
			max_entities = config.max_entities,
			max_components = config.max_components,
			auto_registration = config.auto_registration,
			"created entity store"
		);

		Self {
			entities: EntityManager::with_capacity(config.max_entities),
			registry: ComponentRegistry::new(config.max_components, config.max_entities),
			config,
		}
	}

	pub fn config(&self) -> &StoreConfig {
		&self.config
	}

	/// Creates a single [entity](Entity) with no [components](Component) attached.
	pub fn try_create_entity(&mut self) -> EcsResult<Entity> {
		let entity = self.entities.create_entity()?;
		tracing::trace!(%entity, "created entity");
		Ok(entity)
	}

	/// Destroys `entity` along with every [component](Component) attached to it.
	pub fn try_destroy_entity(&mut self, entity: Entity) -> EcsResult<()> {
		let mask = self.entities.destroy_entity(entity)?;
		for bit in mask.iter_ones() {
			if let Some(container) = self.registry.container_at_mut(bit) {
				container.remove_entity(entity);
			}
		}

		tracing::trace!(%entity, components = mask.count(), "destroyed entity");
		Ok(())
	}

	/// Register `T` ahead of its first use, returning the bit it occupies in every [ComponentMask].
	pub fn register_component<T: Component>(&mut self) -> EcsResult<usize> {
		self.registry.register::<T>()
	}

	/// Attach `value` to `entity` and return a reference to the stored value.
	///
	/// Fails if `entity` already has a `T`, or if `T` is unregistered and auto-registration is disabled.
	pub fn try_add_component<T: Component>(&mut self, entity: Entity, value: T) -> EcsResult<&mut T> {
		self.entities.index_of(entity)?;
		let bit = match self.config.auto_registration {
			true => self.registry.register::<T>()?,
			false => self.registry.bit::<T>()?,
		};

		let value = self.registry.container_mut::<T>()?.insert(entity, value)?;
		self.entities.component_mask_mut(entity)?.set(bit, true);
		Ok(value)
	}

	/// Gets a reference to the [component](Component) of type `T` bound to `entity`.
	pub fn try_get_component<T: Component>(&self, entity: Entity) -> EcsResult<&T> {
		self.entities.index_of(entity)?;
		self.registry
			.container::<T>()
			.ok()
			.and_then(|container| container.get(entity))
			.ok_or(EcsError::ComponentNotFound {
				entity,
				component: T::component_id(),
			})
	}

	/// Gets a mutable reference to the [component](Component) of type `T` bound to `entity`.
	pub fn try_get_component_mut<T: Component>(&mut self, entity: Entity) -> EcsResult<&mut T> {
		self.entities.index_of(entity)?;
		self.registry
			.container_mut::<T>()
			.ok()
			.and_then(|container| container.get_mut(entity))
			.ok_or(EcsError::ComponentNotFound {
				entity,
				component: T::component_id(),
			})
	}

	/// Detach the [component](Component) of type `T` from `entity` and return it.
	pub fn try_remove_component<T: Component>(&mut self, entity: Entity) -> EcsResult<T> {
		self.entities.index_of(entity)?;
		let not_found = EcsError::ComponentNotFound {
			entity,
			component: T::component_id(),
		};

		let bit = self.registry.bit::<T>().map_err(|_| not_found.clone())?;
		let value = self.registry.container_mut::<T>()?.remove(entity).ok_or(not_found)?;
		self.entities.component_mask_mut(entity)?.set(bit, false);
		Ok(value)
	}

	/// Create a [View] over every entity owning all the components in `Q`.
	///
	/// Fails if `Q` names a type twice, or if a type is unregistered and auto-registration is disabled.
	pub fn try_view<Q: ComponentSet>(&mut self) -> EcsResult<View<'_, Q>> {
		let (required, containers) = Q::bind(&mut self.registry, self.config.auto_registration)?;
		Ok(View::new(&self.entities, required, containers))
	}

	/// The [ComponentMask] of an alive `entity`.
	pub fn component_mask(&self, entity: Entity) -> EcsResult<ComponentMask> {
		self.entities.component_mask(entity).copied()
	}

	/// Check whether `entity` is alive and has a [component](Component) of type `T`.
	pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
		match (self.registry.bit::<T>(), self.entities.component_mask(entity)) {
			(Ok(bit), Ok(mask)) => mask.get(bit),
			_ => false,
		}
	}

	pub fn is_alive(&self, entity: Entity) -> bool {
		self.entities.is_alive(entity)
	}

	/// Number of alive entities.
	pub fn entity_count(&self) -> usize {
		self.entities.len()
	}

	/// Number of entities holding a [component](Component) of type `T`.
	pub fn component_count<T: Component>(&self) -> usize {
		self.registry.container::<T>().map(ComponentContainer::len).unwrap_or(0)
	}

	/// The container holding every `T`, if `T` was registered.
	pub fn container<T: Component>(&self) -> Option<&ComponentContainer<T>> {
		self.registry.container::<T>().ok()
	}

	pub fn entity_manager(&self) -> &EntityManager {
		&self.entities
	}

	pub fn registry(&self) -> &ComponentRegistry {
		&self.registry
	}

	/// Destroy every entity and component. Component registrations are kept
	/// and handles issued before are never reused.
	pub fn clear(&mut self) {
		tracing::debug!(entities = self.entities.len(), "clearing entity store");
		self.entities.clear();
		self.registry.clear_containers();
	}
}

impl Default for EntityStore {
	fn default() -> Self {
		Self::new()
	}
}

impl EcsContext for EntityStore {
	#[track_caller]
	fn create_entity(&mut self) -> Entity {
		unwrap_or_panic(self.try_create_entity())
	}

	#[track_caller]
	fn destroy_entity(&mut self, entity: Entity) {
		unwrap_or_panic(self.try_destroy_entity(entity))
	}

	#[track_caller]
	fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> &mut T {
		unwrap_or_panic(self.try_add_component(entity, value))
	}

	#[track_caller]
	fn get_component<T: Component>(&self, entity: Entity) -> &T {
		unwrap_or_panic(self.try_get_component(entity))
	}

	#[track_caller]
	fn get_component_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
		unwrap_or_panic(self.try_get_component_mut(entity))
	}

	#[track_caller]
	fn remove_component<T: Component>(&mut self, entity: Entity) -> T {
		unwrap_or_panic(self.try_remove_component(entity))
	}

	#[track_caller]
	fn view<Q: ComponentSet>(&mut self) -> View<'_, Q> {
		unwrap_or_panic(self.try_view())
	}
}
