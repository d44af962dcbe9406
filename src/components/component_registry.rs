use crate::components::{AnyContainer, Component, ComponentContainer, ComponentId, ComponentType};
use crate::error::{EcsError, EcsResult};
use crate::data_structures::ComponentMask;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;

type Hasher = BuildHasherDefault<NoHashHasher<usize>>;

/// Assigns every component type used by a store a bit in the [ComponentMask]
/// and owns the [container](ComponentContainer) holding that type's values.
///
/// Bits are handed out densely in order of first registration and never change afterwards.
/// The container of the type assigned bit `k` lives at position `k`.
pub struct ComponentRegistry {
	max_components: usize,
	container_capacity: usize,
	bits: HashMap<ComponentId, usize, Hasher>,
	containers: Vec<Box<dyn AnyContainer>>,
}

impl ComponentRegistry {
	/// # Arguments
	/// * `max_components` - The maximum number of component types that can be registered
	/// * `container_capacity` - The maximum number of values each container can hold
	pub fn new(max_components: usize, container_capacity: usize) -> Self {
		debug_assert!(max_components <= ComponentMask::WIDTH);
		Self {
			max_components,
			container_capacity,
			bits: HashMap::default(),
			containers: Vec::new(),
		}
	}

	/// Register `T`, returning its bit. Registering a type twice returns the same bit.
	pub fn register<T: Component>(&mut self) -> EcsResult<usize> {
		self.register_type(ComponentType::of::<T>())
	}

	/// Register a [ComponentType], returning its bit.
	pub fn register_type(&mut self, component: ComponentType) -> EcsResult<usize> {
		if let Some(bit) = self.bits.get(&component.id()) {
			return Ok(*bit);
		}
		if self.containers.len() >= self.max_components {
			return Err(EcsError::ComponentCapacityExceeded {
				capacity: self.max_components,
			});
		}

		let bit = self.containers.len();
		self.containers.push(component.make_container(self.container_capacity));
		self.bits.insert(component.id(), bit);

		tracing::debug!(component = component.id().name(), bit, "registered component type");
		Ok(bit)
	}

	/// The bit assigned to the component type `id`.
	#[inline]
	pub fn bit_of(&self, id: ComponentId) -> Option<usize> {
		self.bits.get(&id).copied()
	}

	/// The bit assigned to `T`, failing if `T` was never registered.
	#[inline]
	pub fn bit<T: Component>(&self) -> EcsResult<usize> {
		let component = T::component_id();
		self.bit_of(component).ok_or(EcsError::ComponentNotRegistered { component })
	}

	#[inline]
	pub fn is_registered<T: Component>(&self) -> bool {
		self.bits.contains_key(&T::component_id())
	}

	pub fn container<T: Component>(&self) -> EcsResult<&ComponentContainer<T>> {
		let bit = self.bit::<T>()?;
		Ok(self.containers[bit].downcast_ref::<T>())
	}

	pub fn container_mut<T: Component>(&mut self) -> EcsResult<&mut ComponentContainer<T>> {
		let bit = self.bit::<T>()?;
		Ok(self.containers[bit].downcast_mut::<T>())
	}

	/// The type-erased container assigned to `bit`.
	pub fn container_at_mut(&mut self, bit: usize) -> Option<&mut (dyn AnyContainer + 'static)> {
		Some(&mut **self.containers.get_mut(bit)?)
	}

	/// All containers, indexed by bit.
	pub(crate) fn containers_mut(&mut self) -> &mut [Box<dyn AnyContainer>] {
		&mut self.containers
	}

	/// Number of registered component types.
	pub fn len(&self) -> usize {
		self.containers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.containers.is_empty()
	}

	/// Drop every stored component while keeping all registrations.
	pub fn clear_containers(&mut self) {
		for container in self.containers.iter_mut() {
			container.clear();
		}
	}
}
