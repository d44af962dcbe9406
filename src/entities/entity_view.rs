use crate::data_structures::ComponentMask;
use crate::entities::{Entity, EntityManager};
use crate::components::ComponentSet;

/// A query over every alive [entity](Entity) owning all the [components](crate::components::Component) in `Q`.
///
/// A view is bound to the containers of `Q` when it is created and reads the store's current state
/// on every pass; it is not a snapshot. It borrows the store mutably, so entities and components
/// cannot be created, destroyed, added or removed while the view exists.
pub struct View<'s, Q: ComponentSet> {
	required: ComponentMask,
	entities: &'s EntityManager,
	containers: Q::Containers<'s>,
}

impl<'s, Q: ComponentSet> View<'s, Q> {
	pub(crate) fn new(entities: &'s EntityManager, required: ComponentMask, containers: Q::Containers<'s>) -> Self {
		Self {
			required,
			entities,
			containers,
		}
	}

	/// The mask an entity's [ComponentMask] must contain to be visited.
	pub fn required_mask(&self) -> ComponentMask {
		self.required
	}

	/// Invoke `func` with every matching entity and mutable references to its components.
	///
	/// Entities are visited in the entity manager's dense order, each exactly once per call.
	pub fn each<'v>(&'v mut self, mut func: impl FnMut(Entity, Q::Item<'v>)) {
		let required = self.required;
		let entities = self.entities;
		let fetch = Q::fetch(&mut self.containers);

		for (entity, mask) in entities.entities().iter().zip(entities.masks()) {
			if !mask.contains_all(&required) {
				continue;
			}

			// SAFETY: an alive entity occupies exactly one dense slot, so it is never fetched twice.
			let item = unsafe { Q::get(&fetch, *entity) };
			debug_assert!(item.is_some(), "Component mask of {} is out of sync with its containers", entity);

			if let Some(item) = item {
				func(*entity, item);
			}
		}
	}

	/// Iterate over the matching entities without touching their components.
	pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
		let required = self.required;
		self.entities
			.entities()
			.iter()
			.zip(self.entities.masks())
			.filter(move |(_, mask)| mask.contains_all(&required))
			.map(|(entity, _)| *entity)
	}

	/// Number of matching entities.
	pub fn count(&self) -> usize {
		self.entities().count()
	}
}
