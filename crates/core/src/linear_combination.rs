// Copyright 2025 Irreducible Inc.

use std::{
	fmt,
	ops::{Add, Neg, Sub},
};

use itertools::{Either, Itertools};
use r1cs_field::Field;

use crate::variable::{LinearCombinationIndex, Variable};

/// A weighted sum of variables, $\sum_i c_i \cdot x_i$.
///
/// Terms are kept in insertion order and are not merged; a variable may appear more than once.
/// The constant is expressed as a term on [`Variable::ONE`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinearCombination<F: Field> {
	terms: Vec<(Variable, F)>,
}

impl<F: Field> LinearCombination<F> {
	pub const fn new() -> Self {
		Self { terms: Vec::new() }
	}

	pub fn from_terms(terms: impl IntoIterator<Item = (Variable, F)>) -> Self {
		Self {
			terms: terms.into_iter().collect(),
		}
	}

	/// The combination `value * ONE`.
	pub fn constant(value: F) -> Self {
		Self {
			terms: vec![(Variable::ONE, value)],
		}
	}

	#[must_use]
	pub fn add_term(mut self, variable: Variable, coefficient: F) -> Self {
		self.push_term(variable, coefficient);
		self
	}

	pub fn push_term(&mut self, variable: Variable, coefficient: F) {
		self.terms.push((variable, coefficient));
	}

	pub fn terms(&self) -> impl Iterator<Item = (Variable, F)> + '_ {
		self.terms.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.terms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Returns the variable if this combination is exactly `1 * variable`.
	pub fn as_variable(&self) -> Option<Variable> {
		match self.terms.as_slice() {
			[(variable, coefficient)] if *coefficient == F::ONE => Some(*variable),
			_ => None,
		}
	}

	#[must_use]
	pub fn scale(mut self, factor: F) -> Self {
		for (_, coefficient) in &mut self.terms {
			*coefficient *= factor;
		}
		self
	}

	/// Evaluates the combination, reading variable values through `value_of`.
	pub fn evaluate(&self, mut value_of: impl FnMut(Variable) -> F) -> F {
		self.terms
			.iter()
			.map(|&(variable, coefficient)| coefficient * value_of(variable))
			.sum()
	}
}

impl<F: Field> From<Variable> for LinearCombination<F> {
	fn from(variable: Variable) -> Self {
		Self {
			terms: vec![(variable, F::ONE)],
		}
	}
}

impl<F: Field> Add for LinearCombination<F> {
	type Output = Self;

	fn add(mut self, rhs: Self) -> Self::Output {
		self.terms.extend(rhs.terms);
		self
	}
}

impl<F: Field> Neg for LinearCombination<F> {
	type Output = Self;

	fn neg(self) -> Self::Output {
		self.scale(-F::ONE)
	}
}

impl<F: Field> Sub for LinearCombination<F> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		self + (-rhs)
	}
}

impl<F: Field> fmt::Display for LinearCombination<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.terms.is_empty() {
			return write!(f, "0");
		}
		let rendered = self
			.terms
			.iter()
			.format_with(" + ", |(variable, coefficient), g| {
				g(&format_args!("{coefficient}*{variable}"))
			});
		write!(f, "{rendered}")
	}
}

/// One side of a rank-1 constraint.
///
/// A bare variable delegates to the variable's own value. Anything else owns a cache slot on
/// the board where its evaluated value can be memoized during witness generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinearExpression<F: Field> {
	Variable(Variable),
	Combination {
		index: LinearCombinationIndex,
		combination: LinearCombination<F>,
	},
}

impl<F: Field> LinearExpression<F> {
	pub const fn variable(variable: Variable) -> Self {
		Self::Variable(variable)
	}

	/// Wraps a combination in an already allocated cache slot.
	///
	/// Prefer [`crate::board::Board::combination`], which allocates the slot itself.
	pub const fn with_slot(
		index: LinearCombinationIndex,
		combination: LinearCombination<F>,
	) -> Self {
		Self::Combination { index, combination }
	}

	pub const fn is_variable(&self) -> bool {
		matches!(self, Self::Variable(_))
	}

	pub const fn combination_index(&self) -> Option<LinearCombinationIndex> {
		match self {
			Self::Variable(_) => None,
			Self::Combination { index, .. } => Some(*index),
		}
	}

	/// The weighted terms of this expression; a bare variable is the single term `1 * v`.
	pub fn terms(&self) -> impl Iterator<Item = (Variable, F)> + '_ {
		match self {
			Self::Variable(variable) => Either::Left(std::iter::once((*variable, F::ONE))),
			Self::Combination { combination, .. } => Either::Right(combination.terms()),
		}
	}

	/// Evaluates the expression from its terms, ignoring any cached value.
	pub fn evaluate(&self, mut value_of: impl FnMut(Variable) -> F) -> F {
		match self {
			Self::Variable(variable) => value_of(*variable),
			Self::Combination { combination, .. } => combination.evaluate(value_of),
		}
	}
}

impl<F: Field> From<Variable> for LinearExpression<F> {
	fn from(variable: Variable) -> Self {
		Self::Variable(variable)
	}
}

impl<F: Field> fmt::Display for LinearExpression<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Variable(variable) => write!(f, "{variable}"),
			Self::Combination { combination, .. } => write!(f, "{combination}"),
		}
	}
}
