//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;  
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.

mod entity_view;
mod entity_store;
mod entity_manager;
mod entity_instance;

pub use entity_view::*;
pub use entity_store::*;
pub use entity_manager::*;
pub use entity_instance::*;
