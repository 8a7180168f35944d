// Copyright 2025 Irreducible Inc.

use std::fmt;

/// Position of a variable in the value table of a [`crate::board::Board`].
pub type VariableIndex = usize;

/// Handle to a variable allocated on a [`crate::board::Board`].
///
/// This is essentially an index and is only meaningful for the board that issued it. Index 0 is
/// reserved for the constant [`Variable::ONE`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(VariableIndex);

impl Variable {
	/// The constant one, present in every constraint system.
	pub const ONE: Self = Self(0);

	/// Create a variable handle from a raw index.
	///
	/// Largely an escape hatch and discouraged to use.
	pub const fn from_index(index: VariableIndex) -> Self {
		Self(index)
	}

	pub const fn index(&self) -> VariableIndex {
		self.0
	}

	pub const fn is_constant(&self) -> bool {
		self.0 == 0
	}
}

impl fmt::Display for Variable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_constant() {
			write!(f, "ONE")
		} else {
			write!(f, "x{}", self.0)
		}
	}
}

/// Identifier for the cache slot of a non-trivial [`crate::LinearExpression`].
///
/// Combination slots live in their own index space, disjoint from variables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinearCombinationIndex(usize);

impl LinearCombinationIndex {
	/// Largely an escape hatch and discouraged to use.
	pub const fn from_index(index: usize) -> Self {
		Self(index)
	}

	pub const fn index(&self) -> usize {
		self.0
	}
}

impl fmt::Display for LinearCombinationIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "lc{}", self.0)
	}
}
