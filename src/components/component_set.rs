use crate::components::{AnyContainer, Component, ComponentContainer, ComponentRegistry, ColumnFetch};
use crate::data_structures::ComponentMask;
use crate::config::MAX_COMPONENTS;
use crate::error::{EcsError, EcsResult};
use crate::entities::Entity;
use paste::paste;

/// A set of [Component] types a [View](crate::entities::View) iterates over.
///
/// Implemented for every [Component] and for tuples of up to 12 [Components](Component).
/// The items handed to a view's callback are mutable references to each type, in the order of the set.
pub trait ComponentSet: 'static {
	/// The containers of every type in the set, bound for the lifetime of a view.
	type Containers<'s>;

	/// Raw access to the bound containers for the duration of one iteration pass.
	#[doc(hidden)]
	type Fetch<'v>;

	/// What a view yields for a single entity.
	type Item<'v>;

	/// Resolve the bits and containers of every type in the set.
	///
	/// Types which were never registered are registered first when `register` is set.
	fn bind(
		registry: &mut ComponentRegistry, register: bool,
	) -> EcsResult<(ComponentMask, Self::Containers<'_>)>;

	#[doc(hidden)]
	fn fetch<'v>(containers: &'v mut Self::Containers<'_>) -> Self::Fetch<'v>;

	/// # Safety
	/// No two calls on the same [Fetch](Self::Fetch) may pass the same `entity`
	/// while a previously returned item is still alive.
	#[doc(hidden)]
	unsafe fn get<'v>(fetch: &Self::Fetch<'v>, entity: Entity) -> Option<Self::Item<'v>>;
}

#[inline(always)]
fn resolve_bit<T: Component>(registry: &mut ComponentRegistry, register: bool) -> EcsResult<usize> {
	match register {
		true => registry.register::<T>(),
		false => registry.bit::<T>(),
	}
}

type ContainerSlots<'s> = [Option<&'s mut Box<dyn AnyContainer>>; MAX_COMPONENTS];

/// One slot per registered bit, each container borrowed at most once.
#[inline(always)]
fn container_slots(registry: &mut ComponentRegistry) -> ContainerSlots<'_> {
	let mut slots: ContainerSlots = std::array::from_fn(|_| None);
	for (slot, container) in slots.iter_mut().zip(registry.containers_mut()) {
		*slot = Some(container);
	}
	slots
}

#[inline(always)]
fn take_container<'s, T: Component>(
	slots: &mut [Option<&'s mut Box<dyn AnyContainer>>], bit: usize,
) -> EcsResult<&'s mut ComponentContainer<T>> {
	match slots.get_mut(bit).and_then(Option::take) {
		Some(container) => Ok(container.downcast_mut::<T>()),
		None => Err(EcsError::DuplicateQueryComponent {
			component: T::component_id(),
		}),
	}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        paste! {
            #[allow(unused_parens)]
            impl<$($t: Component),*> ComponentSet for ($($t),*) {
                type Containers<'s> = ($(&'s mut ComponentContainer<$t>),*);
                type Fetch<'v> = ($(ColumnFetch<'v, $t>),*);
                type Item<'v> = ($(&'v mut $t),*);

                fn bind(
                    registry: &mut ComponentRegistry, register: bool,
                ) -> EcsResult<(ComponentMask, Self::Containers<'_>)> {
                    let mut mask = ComponentMask::new();
                    $(
                        let [<bit_ $t:lower>] = resolve_bit::<$t>(registry, register)?;
                        mask.set([<bit_ $t:lower>], true);
                    )*

                    let mut slots = container_slots(registry);
                    $(let [<$t:lower>] = take_container::<$t>(&mut slots, [<bit_ $t:lower>])?;)*
                    Ok((mask, ($([<$t:lower>]),*)))
                }

                #[inline(always)]
                fn fetch<'v>(containers: &'v mut Self::Containers<'_>) -> Self::Fetch<'v> {
                    let ($([<$t:lower>]),*) = containers;
                    ($([<$t:lower>].column_fetch()),*)
                }

                #[inline(always)]
                unsafe fn get<'v>(fetch: &Self::Fetch<'v>, entity: Entity) -> Option<Self::Item<'v>> {
                    let ($([<$t:lower>]),*) = fetch;
                    Some(($([<$t:lower>].get(entity)?),*))
                }
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
