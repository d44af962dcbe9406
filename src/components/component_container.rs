use crate::components::{Component, ComponentId};
use crate::error::{EcsError, EcsResult};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use crate::entities::Entity;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::any::Any;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Densely packed storage for all components of type `T`.
///
/// Values are kept gap-free: removing a value moves the last one into the freed slot.
/// A value's position is therefore not stable, only the owning [Entity] is.
pub struct ComponentContainer<T: Component> {
	capacity: usize,
	values: Vec<T>,
	entities: Vec<Entity>,
	indices: HashMap<Entity, usize, Hasher>,
}

impl<T: Component> ComponentContainer<T> {
	/// Create an empty container holding at most `capacity` values.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			capacity,
			values: Vec::new(),
			entities: Vec::new(),
			indices: HashMap::default(),
		}
	}

	/// Store `value` for `entity` and return a reference to the stored value.
	///
	/// Fails if `entity` already owns a value of this type or if the container is full.
	pub fn insert(&mut self, entity: Entity, value: T) -> EcsResult<&mut T> {
		if self.indices.contains_key(&entity) {
			return Err(EcsError::DuplicateComponent {
				entity,
				component: T::component_id(),
			});
		}
		if self.values.len() >= self.capacity {
			return Err(EcsError::EntityCapacityExceeded { capacity: self.capacity });
		}

		let index = self.values.len();
		self.indices.insert(entity, index);
		self.entities.push(entity);
		self.values.push(value);
		Ok(&mut self.values[index])
	}

	#[inline]
	pub fn get(&self, entity: Entity) -> Option<&T> {
		let index = *self.indices.get(&entity)?;
		Some(&self.values[index])
	}

	#[inline]
	pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
		let index = *self.indices.get(&entity)?;
		Some(&mut self.values[index])
	}

	/// Remove the value owned by `entity`, filling its slot with the last value.
	pub fn remove(&mut self, entity: Entity) -> Option<T> {
		let index = self.indices.remove(&entity)?;
		let last = *self.entities.last()?;

		self.entities.swap_remove(index);
		let value = self.values.swap_remove(index);
		if last != entity {
			self.indices.insert(last, index);
		}

		Some(value)
	}

	#[inline]
	pub fn contains(&self, entity: Entity) -> bool {
		self.indices.contains_key(&entity)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Drop every stored value.
	pub fn clear(&mut self) {
		self.indices.clear();
		self.entities.clear();
		self.values.clear();
	}

	/// The stored values in dense order.
	pub fn as_slice(&self) -> &[T] {
		&self.values
	}

	/// The owners of the stored values, parallel to [as_slice](Self::as_slice).
	pub fn entities(&self) -> &[Entity] {
		&self.entities
	}

	pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
		self.entities.iter().copied().zip(self.values.iter())
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
		self.entities.iter().copied().zip(self.values.iter_mut())
	}

	/// Split the container into raw per-entity access for a single iteration pass.
	#[inline(always)]
	pub(crate) fn column_fetch(&mut self) -> ColumnFetch<'_, T> {
		ColumnFetch {
			len: self.values.len(),
			values: self.values.as_mut_ptr(),
			indices: &self.indices,
			marker: PhantomData,
		}
	}
}

/// Hands out mutable references to the values of a [ComponentContainer] by owning [Entity].
///
/// The container stays mutably borrowed for `'v`, so its layout cannot change while references are out.
#[doc(hidden)]
pub struct ColumnFetch<'v, T> {
	len: usize,
	values: *mut T,
	indices: &'v HashMap<Entity, usize, Hasher>,
	marker: PhantomData<&'v mut T>,
}

impl<'v, T> ColumnFetch<'v, T> {
	/// # Safety
	/// The same `entity` must not be passed twice while the first reference is still alive.
	#[inline(always)]
	pub unsafe fn get(&self, entity: Entity) -> Option<&'v mut T> {
		let index = *self.indices.get(&entity)?;
		debug_assert!(index < self.len);
		// SAFETY: every entity maps to its own slot, so distinct entities never alias.
		Some(&mut *self.values.add(index))
	}
}

/// A type-erased [ComponentContainer].
///
/// Every container reports the [ComponentId] of the type it stores,
/// so a downcast can be checked against the expected type before it happens.
pub trait AnyContainer {
	fn component_id(&self) -> ComponentId;
	fn len(&self) -> usize;
	fn contains(&self, entity: Entity) -> bool;
	/// Drop the value owned by `entity`, if any.
	fn remove_entity(&mut self, entity: Entity) -> bool;
	fn clear(&mut self);
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> AnyContainer for ComponentContainer<T> {
	fn component_id(&self) -> ComponentId {
		T::component_id()
	}

	fn len(&self) -> usize {
		self.values.len()
	}

	fn contains(&self, entity: Entity) -> bool {
		ComponentContainer::contains(self, entity)
	}

	fn remove_entity(&mut self, entity: Entity) -> bool {
		self.remove(entity).is_some()
	}

	fn clear(&mut self) {
		ComponentContainer::clear(self)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl dyn AnyContainer {
	/// Downcast to the concrete container of `T`.
	///
	/// Panics if the container stores a different component type.
	pub fn downcast_ref<T: Component>(&self) -> &ComponentContainer<T> {
		assert_eq!(
			self.component_id(),
			T::component_id(),
			"Container does not store components of type T"
		);
		match self.as_any().downcast_ref() {
			Some(container) => container,
			None => unreachable!("component id matched but the container type did not"),
		}
	}

	/// Downcast to the concrete container of `T`.
	///
	/// Panics if the container stores a different component type.
	pub fn downcast_mut<T: Component>(&mut self) -> &mut ComponentContainer<T> {
		assert_eq!(
			self.component_id(),
			T::component_id(),
			"Container does not store components of type T"
		);
		match self.as_any_mut().downcast_mut() {
			Some(container) => container,
			None => unreachable!("component id matched but the container type did not"),
		}
	}
}
