// Copyright 2025 Irreducible Inc.

use auto_impl::auto_impl;
use r1cs_field::Field;

use super::Board;
use crate::{
	linear_combination::{LinearCombination, LinearExpression},
	variable::{LinearCombinationIndex, Variable},
};

/// Read/write access to witness values, either against the shared tables of a [`Board`] or
/// against a worker's [`Scratch`] buffer.
///
/// Witness generation code written against this trait runs unchanged in both modes. Reading
/// [`Variable::ONE`] always yields the board's constant term and writing it panics.
#[auto_impl(&mut, Box)]
pub trait WitnessValues<F: Field> {
	fn get_value(&mut self, variable: Variable) -> F;

	fn set_value(&mut self, variable: Variable, value: F);

	fn get_combination_value(&mut self, index: LinearCombinationIndex) -> F;

	fn set_combination_value(&mut self, index: LinearCombinationIndex, value: F);

	fn get_expression_value(&mut self, expression: &LinearExpression<F>) -> F {
		match expression {
			LinearExpression::Variable(variable) => self.get_value(*variable),
			LinearExpression::Combination { index, .. } => self.get_combination_value(*index),
		}
	}

	fn set_expression_value(&mut self, expression: &LinearExpression<F>, value: F) {
		match expression {
			LinearExpression::Variable(variable) => self.set_value(*variable, value),
			LinearExpression::Combination { index, .. } => {
				self.set_combination_value(*index, value)
			}
		}
	}

	/// Evaluates `combination` against the current variable values.
	fn evaluate(&mut self, combination: &LinearCombination<F>) -> F {
		let mut acc = F::ZERO;
		for (variable, coefficient) in combination.terms() {
			acc += coefficient * self.get_value(variable);
		}
		acc
	}

	/// Evaluates `expression` from its terms and memoizes the result in its cache slot.
	fn compute_expression_value(&mut self, expression: &LinearExpression<F>) -> F {
		match expression {
			LinearExpression::Variable(variable) => self.get_value(*variable),
			LinearExpression::Combination { index, combination } => {
				let value = self.evaluate(combination);
				self.set_combination_value(*index, value);
				value
			}
		}
	}

	/// Assigns `values[i]` to `variables[i]`.
	fn fill(&mut self, variables: &[Variable], values: &[F]) {
		assert_eq!(variables.len(), values.len(), "variables and values must have equal length");
		for (&variable, &value) in variables.iter().zip(values) {
			self.set_value(variable, value);
		}
	}
}

/// [`WitnessValues`] over the shared tables of a board.
#[derive(Debug)]
pub struct SharedValues<'a, F: Field> {
	board: &'a mut Board<F>,
}

impl<'a, F: Field> SharedValues<'a, F> {
	pub(super) fn new(board: &'a mut Board<F>) -> Self {
		Self { board }
	}
}

impl<F: Field> WitnessValues<F> for SharedValues<'_, F> {
	fn get_value(&mut self, variable: Variable) -> F {
		self.board.get_value(variable)
	}

	fn set_value(&mut self, variable: Variable, value: F) {
		self.board.set_value(variable, value);
	}

	fn get_combination_value(&mut self, index: LinearCombinationIndex) -> F {
		self.board.expect_combination(index);
		self.board.lc_values[index.index()]
	}

	fn set_combination_value(&mut self, index: LinearCombinationIndex, value: F) {
		self.board.expect_combination(index);
		self.board.lc_values[index.index()] = value;
	}
}

/// Value buffers private to one execution context.
///
/// Owned by the worker that computes a part of the witness. Buffers start empty and grow on
/// demand to the board's current table lengths, so a scratch created before allocation has
/// finished catches up on first use.
#[derive(Debug, Clone, Default)]
pub struct Scratch<F: Field> {
	values: Vec<F>,
	lc_values: Vec<F>,
}

impl<F: Field> Scratch<F> {
	pub const fn new() -> Self {
		Self {
			values: Vec::new(),
			lc_values: Vec::new(),
		}
	}

	/// The scratch value of `variable`, or `None` if the buffer has not grown that far yet.
	pub fn value(&self, variable: Variable) -> Option<F> {
		self.values.get(variable.index()).copied()
	}

	pub fn combination_value(&self, index: LinearCombinationIndex) -> Option<F> {
		self.lc_values.get(index.index()).copied()
	}

	/// Drops all values so the buffer can be reused for another board.
	pub fn clear(&mut self) {
		self.values.clear();
		self.lc_values.clear();
	}
}

/// [`WitnessValues`] over a [`Scratch`] buffer, sized against a board.
#[derive(Debug)]
pub struct ScratchValues<'a, F: Field> {
	board: &'a Board<F>,
	scratch: &'a mut Scratch<F>,
}

impl<'a, F: Field> ScratchValues<'a, F> {
	pub(super) fn new(board: &'a Board<F>, scratch: &'a mut Scratch<F>) -> Self {
		Self { board, scratch }
	}

	fn variable_slot(&mut self, variable: Variable) -> &mut F {
		self.board.expect_variable(variable);
		grow_to(&mut self.scratch.values, self.board.values.len());
		&mut self.scratch.values[variable.index()]
	}

	fn combination_slot(&mut self, index: LinearCombinationIndex) -> &mut F {
		self.board.expect_combination(index);
		grow_to(&mut self.scratch.lc_values, self.board.lc_values.len());
		&mut self.scratch.lc_values[index.index()]
	}
}

fn grow_to<F: Field>(buffer: &mut Vec<F>, len: usize) {
	if buffer.len() < len {
		buffer.resize(len, F::ZERO);
	}
}

impl<F: Field> WitnessValues<F> for ScratchValues<'_, F> {
	fn get_value(&mut self, variable: Variable) -> F {
		if variable.is_constant() {
			return self.board.constant_term;
		}
		*self.variable_slot(variable)
	}

	fn set_value(&mut self, variable: Variable, value: F) {
		assert!(!variable.is_constant(), "the constant variable cannot be assigned");
		*self.variable_slot(variable) = value;
	}

	fn get_combination_value(&mut self, index: LinearCombinationIndex) -> F {
		*self.combination_slot(index)
	}

	fn set_combination_value(&mut self, index: LinearCombinationIndex, value: F) {
		*self.combination_slot(index) = value;
	}
}
