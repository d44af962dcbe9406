use crate::components::{Component, ComponentSet};
use crate::entities::{Entity, View};

/// The operations game code drives an entity component store with.
///
/// Implementations treat every failure as a broken precondition and panic at the call site:
/// using a destroyed handle, reading a component the entity does not own, or exceeding a capacity.
/// [EntityStore](crate::entities::EntityStore) additionally offers a `try_*` variant of each operation.
pub trait EcsContext {
	/// Creates a single [entity](Entity) with no [components](Component) attached.
	fn create_entity(&mut self) -> Entity;

	/// Destroys `entity` together with its [components](Component).
	fn destroy_entity(&mut self, entity: Entity);

	/// Attach `value` to `entity`, returning a reference to the stored value.
	fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> &mut T;

	fn get_component<T: Component>(&self, entity: Entity) -> &T;

	/// Changes made through the returned reference are visible to every later read and [View].
	fn get_component_mut<T: Component>(&mut self, entity: Entity) -> &mut T;

	/// Detach the [component](Component) of type `T` from `entity` and return it.
	fn remove_component<T: Component>(&mut self, entity: Entity) -> T;

	/// Create a [View] over every entity owning all the [components](Component) in `Q`.
	fn view<Q: ComponentSet>(&mut self) -> View<'_, Q>;
}
