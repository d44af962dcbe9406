use std::fmt;

/// A unique handle to an `Entity`.
///
/// Handles are issued in increasing order by an [EntityManager](crate::entities::EntityManager)
/// and are never handed out twice by the same manager.
/// The value `0` is reserved for [Entity::INVALID].
#[derive(Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Entity(pub(crate) u64);

impl Entity {
	/// A handle that never refers to a live entity.
	pub const INVALID: Entity = Entity(0);

	/// The raw value of the handle.
	#[inline(always)]
	pub const fn to_bits(self) -> u64 {
		self.0
	}

	#[inline(always)]
	pub const fn is_valid(self) -> bool {
		self.0 != 0
	}
}

impl fmt::Debug for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Entity({})", self.0)
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}
