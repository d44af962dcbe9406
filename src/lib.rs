//! A small entity component store built around per-entity component bitmasks.
//!
//! [Entities](entities::Entity) are plain handles. Their data lives in one densely packed
//! [container](components::ComponentContainer) per [component](components::Component) type,
//! and every entity carries a [mask](data_structures::ComponentMask) naming the component types it owns.
//! [Views](entities::View) filter entities by mask and hand out references into the dense storage.

extern crate self as bitmask_ecs;

pub mod config;
pub mod components;
pub mod data_structures;
pub mod entities;
mod context;
mod error;

pub use lazy_static::lazy_static;

pub use context::EcsContext;
pub use error::{EcsError, EcsResult};

pub mod prelude {
	pub use crate::components::*;
	pub use crate::config::StoreConfig;
	pub use crate::context::EcsContext;
	pub use crate::error::{EcsError, EcsResult};
	pub use crate::data_structures::ComponentMask;
	pub use crate::entities::{Entity, EntityManager, EntityStore, View};
}

#[cfg(test)]
mod tests;
