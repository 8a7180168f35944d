// Copyright 2025 Irreducible Inc.

use std::{
	fmt::{Debug, Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};
use rand::RngCore;

use crate::{
	arithmetic_traits::{InvertOrZero, Square},
	error::Error,
	field::Field,
};

/// The Mersenne prime $2^{31} - 1$.
pub const M31_MODULUS: u32 = 0x7fff_ffff;

/// An element of the prime field of order [`M31_MODULUS`], stored in canonical form.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct M31(u32);

impl M31 {
	/// Creates an element from a canonical representative.
	pub const fn new(value: u32) -> Result<Self, Error> {
		if value >= M31_MODULUS {
			return Err(Error::NotInField {
				value: value as u64,
			});
		}
		Ok(Self(value))
	}

	/// Creates an element from any integer, reducing it modulo the field order.
	pub const fn from_u64(value: u64) -> Self {
		Self(reduce_u64(value))
	}

	/// Returns the canonical representative.
	pub const fn val(self) -> u32 {
		self.0
	}
}

#[inline]
const fn reduce_u64(x: u64) -> u32 {
	let p = M31_MODULUS as u64;
	// Two folds bring any u64 below 2p.
	let x = (x & p) + (x >> 31);
	let x = (x & p) + (x >> 31);
	let x = if x >= p { x - p } else { x };
	x as u32
}

impl From<u32> for M31 {
	fn from(value: u32) -> Self {
		Self::from_u64(value as u64)
	}
}

impl From<M31> for u32 {
	fn from(value: M31) -> Self {
		value.0
	}
}

impl Neg for M31 {
	type Output = Self;

	fn neg(self) -> Self::Output {
		if self.0 == 0 {
			self
		} else {
			Self(M31_MODULUS - self.0)
		}
	}
}

impl Add<Self> for M31 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Self(reduce_u64(self.0 as u64 + rhs.0 as u64))
	}
}

impl Sub<Self> for M31 {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn sub(self, rhs: Self) -> Self::Output {
		self + (-rhs)
	}
}

impl Mul<Self> for M31 {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		Self(reduce_u64(self.0 as u64 * rhs.0 as u64))
	}
}

macro_rules! impl_ref_ops {
	($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident);* $(;)?) => {
		$(
			impl $trait<&Self> for M31 {
				type Output = Self;

				fn $method(self, rhs: &Self) -> Self::Output {
					$trait::$method(self, *rhs)
				}
			}

			impl $assign_trait<Self> for M31 {
				fn $assign_method(&mut self, rhs: Self) {
					*self = $trait::$method(*self, rhs);
				}
			}

			impl $assign_trait<&Self> for M31 {
				fn $assign_method(&mut self, rhs: &Self) {
					*self = $trait::$method(*self, *rhs);
				}
			}
		)*
	};
}

impl_ref_ops! {
	Add::add, AddAssign::add_assign;
	Sub::sub, SubAssign::sub_assign;
	Mul::mul, MulAssign::mul_assign;
}

impl Sum for M31 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for M31 {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Product for M31 {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<'a> Product<&'a Self> for M31 {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl Square for M31 {
	fn square(self) -> Self {
		self * self
	}
}

impl InvertOrZero for M31 {
	fn invert_or_zero(self) -> Self {
		// Fermat: x^(p-2) is the inverse of every non-zero x and maps zero to zero.
		self.pow_vartime(M31_MODULUS as u64 - 2)
	}
}

impl Field for M31 {
	const ZERO: Self = Self(0);
	const ONE: Self = Self(1);
	const CHARACTERISTIC: usize = M31_MODULUS as usize;

	fn random(mut rng: impl RngCore) -> Self {
		loop {
			let candidate = rng.next_u32() & M31_MODULUS;
			if candidate != M31_MODULUS {
				return Self(candidate);
			}
		}
	}
}

impl Display for M31 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{:08x}", self.0)
	}
}

impl Debug for M31 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "M31({self})")
	}
}
