use crate::config::MAX_COMPONENTS;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::fmt;

const BITS: usize = 32;
const FIRST_BIT: u32 = 1 << (BITS - 1);
const WORDS: usize = (MAX_COMPONENTS + BITS - 1) / BITS;

/// A fixed-width bit-field with one bit per registered component type.
///
/// Bit `k` is set when the owner holds the component type assigned to bit `k`
/// by the store's [registry](crate::components::ComponentRegistry).
#[derive(Default, Clone, Copy, Hash, Eq, PartialEq)]
pub struct ComponentMask {
	values: [u32; WORDS],
}

impl ComponentMask {
	/// Number of bits in a mask.
	pub const WIDTH: usize = WORDS * BITS;

	/// Create an empty [ComponentMask].
	pub const fn new() -> Self {
		Self { values: [0; WORDS] }
	}

	/// Get the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the bit to retrieve
	#[inline(always)]
	pub fn get(&self, i: usize) -> bool {
		let (position, shift) = Self::pos_shift(i);
		self.values[position] & (FIRST_BIT >> shift) != 0
	}

	/// Set the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the bit to modify
	#[inline(always)]
	pub fn set(&mut self, i: usize, value: bool) {
		let (position, shift) = Self::pos_shift(i);
		let bit = FIRST_BIT >> shift;

		match value {
			true => self.values[position] |= bit,
			false => self.values[position] &= !bit,
		}
	}

	/// Check if every bit set in `required` is also set in `self`.
	#[inline(always)]
	pub fn contains_all(&self, required: &ComponentMask) -> bool {
		self.values.iter().zip(required.values.iter()).all(|(bits, mask)| (*bits & *mask) == *mask)
	}

	/// Check if the [ComponentMask] is a subset of another [ComponentMask].
	#[inline(always)]
	pub fn is_subset_of(&self, other: &ComponentMask) -> bool {
		other.contains_all(self)
	}

	/// Set all bits to 0.
	pub fn clear(&mut self) {
		self.values = [0; WORDS];
	}

	pub fn is_empty(&self) -> bool {
		self.values.iter().all(|v| *v == 0)
	}

	/// Number of set bits.
	pub fn count(&self) -> usize {
		self.values.iter().map(|v| v.count_ones() as usize).sum()
	}

	/// Iterate over the indices of the set bits in ascending order.
	pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
		self.values.iter().enumerate().flat_map(|(position, value)| {
			let mut value = *value;
			std::iter::from_fn(move || match value {
				0 => None,
				_ => {
					let shift = value.leading_zeros() as usize;
					value &= !(FIRST_BIT >> shift);
					Some(position * BITS + shift)
				},
			})
		})
	}

	#[inline(always)]
	fn pos_shift(a: usize) -> (usize, usize) {
		debug_assert!(a < Self::WIDTH, "bit {} is outside of the component mask", a);
		(a / BITS, a % BITS)
	}
}

impl From<&[usize]> for ComponentMask {
	fn from(bits: &[usize]) -> Self {
		let mut mask = ComponentMask::new();
		for bit in bits {
			mask.set(*bit, true);
		}
		mask
	}
}

impl BitOr for ComponentMask {
	type Output = ComponentMask;

	fn bitor(mut self, rhs: Self) -> Self::Output {
		self |= rhs;
		self
	}
}

impl BitOrAssign for ComponentMask {
	fn bitor_assign(&mut self, rhs: Self) {
		for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
			*lhs |= *rhs;
		}
	}
}

impl BitAnd for ComponentMask {
	type Output = ComponentMask;

	fn bitand(mut self, rhs: Self) -> Self::Output {
		for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
			*lhs &= *rhs;
		}
		self
	}
}

impl fmt::Debug for ComponentMask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter_ones()).finish()
	}
}
