use crate::data_structures::ComponentMask;
use crate::error::{EcsError, EcsResult};
use crate::entities::Entity;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Owns the set of alive [entities](Entity) and their [component masks](ComponentMask).
///
/// Alive entities are packed into a dense array, with their masks stored in a parallel array.
/// Destroying an entity moves the last alive entity into the freed slot,
/// so the dense order is insertion order only until the first destruction.
pub struct EntityManager {
	next_handle: u64,
	capacity: usize,
	entities: Vec<Entity>,
	masks: Vec<ComponentMask>,
	indices: HashMap<Entity, usize, Hasher>,
}

impl EntityManager {
	/// Create a manager allowing at most `capacity` alive entities.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			next_handle: Entity::INVALID.0 + 1,
			capacity,
			entities: Vec::new(),
			masks: Vec::new(),
			indices: HashMap::default(),
		}
	}

	#[cfg(test)]
	pub(crate) fn with_next_handle(mut self, handle: u64) -> Self {
		self.next_handle = handle;
		self
	}

	/// Allocate a new handle with an empty mask.
	pub fn create_entity(&mut self) -> EcsResult<Entity> {
		if self.entities.len() >= self.capacity {
			return Err(EcsError::EntityCapacityExceeded { capacity: self.capacity });
		}

		// The counter wraps to the invalid handle once `u64::MAX` has been issued.
		if self.next_handle == Entity::INVALID.0 {
			return Err(EcsError::HandlesExhausted);
		}

		let entity = Entity(self.next_handle);
		self.next_handle = self.next_handle.wrapping_add(1);

		self.indices.insert(entity, self.entities.len());
		self.entities.push(entity);
		self.masks.push(ComponentMask::new());
		Ok(entity)
	}

	/// Release `entity`, returning the mask it held at the time of destruction.
	pub fn destroy_entity(&mut self, entity: Entity) -> EcsResult<ComponentMask> {
		let index = self.index_of(entity)?;
		let last = self.entities.len() - 1;

		// Unconditional; a self-swap when `entity` is already last.
		self.entities.swap(index, last);
		self.masks.swap(index, last);
		self.indices.insert(self.entities[index], index);
		self.indices.remove(&entity);

		self.entities.pop();
		match self.masks.pop() {
			Some(mask) => Ok(mask),
			None => unreachable!("entity and mask arrays are parallel"),
		}
	}

	/// Dense slot of an alive `entity`.
	#[inline]
	pub fn index_of(&self, entity: Entity) -> EcsResult<usize> {
		match self.indices.get(&entity) {
			Some(index) => Ok(*index),
			None if !entity.is_valid() => Err(EcsError::InvalidEntity),
			None => Err(EcsError::StaleEntity(entity)),
		}
	}

	#[inline]
	pub fn component_mask(&self, entity: Entity) -> EcsResult<&ComponentMask> {
		let index = self.index_of(entity)?;
		Ok(&self.masks[index])
	}

	#[inline]
	pub fn component_mask_mut(&mut self, entity: Entity) -> EcsResult<&mut ComponentMask> {
		let index = self.index_of(entity)?;
		Ok(&mut self.masks[index])
	}

	#[inline]
	pub fn is_alive(&self, entity: Entity) -> bool {
		self.indices.contains_key(&entity)
	}

	/// The alive entities in dense order.
	#[inline]
	pub fn entities(&self) -> &[Entity] {
		&self.entities
	}

	/// The masks of the alive entities, parallel to [entities](Self::entities).
	#[inline]
	pub fn masks(&self) -> &[ComponentMask] {
		&self.masks
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Forget every alive entity. Handles already issued are not handed out again.
	pub fn clear(&mut self) {
		self.entities.clear();
		self.masks.clear();
		self.indices.clear();
	}
}
