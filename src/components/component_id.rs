//! A unique runtime identifier tied to a [Component] type.
//!
//! Developers shouldn't rely on [component ids](ComponentId), as they are not stable between program re-runs.
//! They only identify a type within the running process; which bit of a
//! [component mask](crate::data_structures::ComponentMask) a type occupies is decided separately
//! by each store's [registry](crate::components::ComponentRegistry).

use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicUsize;
use crate::components::Component;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::fmt;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

lazy_static! {
	static ref ID_TO_NAME: RwLock<Vec<&'static str>> = RwLock::new(vec!["<none>"]);
}

/// A globally unique identifier for a type implementing the [`Component`] trait.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`.
	#[inline(always)]
	pub fn of<T: Component>() -> ComponentId {
		T::component_id()
	}

	/// The name of the type this id was generated for.
	pub fn name(&self) -> &'static str {
		ID_TO_NAME.read().get(self.value).copied().unwrap_or("<unknown>")
	}

	#[inline(always)]
	pub(crate) const fn value(&self) -> usize {
		self.value
	}
}

impl fmt::Debug for ComponentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ComponentId({}: {})", self.value, self.name())
	}
}

impl fmt::Display for ComponentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Generates a new [ComponentId]. **Should not be called from user code.**
///
/// To be called once per type from code generated by #[derive([Component])].
#[doc(hidden)]
pub fn get_next(name: &'static str) -> ComponentId {
	let mut names = ID_TO_NAME.write();
	let value = NEXT_ID.fetch_add(1, Relaxed);
	debug_assert!(
		value <= u32::MAX as usize,
		"This is an insane number of components. Please seek help."
	);

	if names.len() <= value {
		names.resize(value + 1, "<unknown>");
	}
	names[value] = name;
	ComponentId { value }
}
