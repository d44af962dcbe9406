//! Capacity and registration policy of an [EntityStore](crate::entities::EntityStore).
//!
//! The constants are the defaults every store starts from.
//! A [StoreConfig] can lower the capacities for a single store, but the number of component types
//! can never exceed [MAX_COMPONENTS], since that is the width of every [ComponentMask](crate::data_structures::ComponentMask).

use crate::error::{EcsError, EcsResult};

/// Default maximum number of simultaneously alive entities.
pub const MAX_ENTITIES: usize = 5000;

/// Maximum number of distinct component types a store can register.
pub const MAX_COMPONENTS: usize = 32;

/// Whether unseen component types are registered on first use.
/// Controlled by the `auto_registration` cargo feature.
pub const AUTO_REGISTRATION: bool = cfg!(feature = "auto_registration");

/// Per-store configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StoreConfig {
	pub max_entities: usize,
	pub max_components: usize,
	pub auto_registration: bool,
}

impl StoreConfig {
	pub const fn new() -> Self {
		Self {
			max_entities: MAX_ENTITIES,
			max_components: MAX_COMPONENTS,
			auto_registration: AUTO_REGISTRATION,
		}
	}

	/// Set the maximum number of alive entities.
	pub const fn with_max_entities(mut self, max_entities: usize) -> Self {
		self.max_entities = max_entities;
		self
	}

	/// Set the maximum number of registered component types.
	pub const fn with_max_components(mut self, max_components: usize) -> Self {
		self.max_components = max_components;
		self
	}

	/// Enable or disable registration of component types on first use.
	pub const fn with_auto_registration(mut self, enabled: bool) -> Self {
		self.auto_registration = enabled;
		self
	}

	pub(crate) fn validate(&self) -> EcsResult<()> {
		if self.max_entities == 0 {
			return Err(EcsError::InvalidConfig("max_entities must be greater than zero".into()));
		}
		if self.max_components == 0 {
			return Err(EcsError::InvalidConfig("max_components must be greater than zero".into()));
		}
		if self.max_components > MAX_COMPONENTS {
			return Err(EcsError::InvalidConfig(format!(
				"max_components ({}) exceeds the component mask width ({})",
				self.max_components, MAX_COMPONENTS
			)));
		}
		Ok(())
	}
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self::new()
	}
}
