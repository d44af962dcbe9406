//! [Components](Component) are the plain data attached to [entities](crate::entities::Entity).
//!
//! Every component type owns one densely packed [ComponentContainer] per store,
//! and a bit in the store's [component masks](crate::data_structures::ComponentMask).

mod component_id;
mod component_set;
mod component_type;
mod component_container;
mod component_registry;

pub use component_id::*;
pub use component_set::*;
pub use component_type::*;
pub use component_container::*;
pub use component_registry::*;
pub use bitmask_ecs_derive::Component;
