// Copyright 2024-2025 Irreducible Inc.


use std::collections::HashMap;

use getset::CopyGetters;
use r1cs_field::Field;
use r1cs_utils::ensure;

use crate::{
	error::Error,
	linear_combination::LinearExpression,
	variable::{Variable, VariableIndex},
};

/// A rank-1 constraint asserting `a * b = c` over the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<F: Field> {
	pub a: LinearExpression<F>,
	pub b: LinearExpression<F>,
	pub c: LinearExpression<F>,
}

impl<F: Field> Constraint<F> {
	pub fn new(
		a: impl Into<LinearExpression<F>>,
		b: impl Into<LinearExpression<F>>,
		c: impl Into<LinearExpression<F>>,
	) -> Self {
		Self {
			a: a.into(),
			b: b.into(),
			c: c.into(),
		}
	}

	/// Evaluates the three sides from their terms.
	pub fn evaluate(&self, mut value_of: impl FnMut(Variable) -> F) -> (F, F, F) {
		(
			self.a.evaluate(&mut value_of),
			self.b.evaluate(&mut value_of),
			self.c.evaluate(&mut value_of),
		)
	}

	pub fn is_satisfied_by(&self, value_of: impl FnMut(Variable) -> F) -> bool {
		let (a, b, c) = self.evaluate(value_of);
		a * b == c
	}
}

/// An append-only list of rank-1 constraints together with the split of its variables into
/// primary (public) and auxiliary (private) inputs.
///
/// Variable `i` for `1 <= i <= primary_input_size` is a primary input; the remaining allocated
/// variables are auxiliary. Annotation maps are always present but stay empty unless the owning
/// board runs with diagnostics.
#[derive(Debug, Clone, Default, CopyGetters)]
pub struct ConstraintSystem<F: Field> {
	constraints: Vec<Constraint<F>>,
	#[get_copy = "pub"]
	primary_input_size: usize,
	#[get_copy = "pub"]
	auxiliary_input_size: usize,
	variable_annotations: HashMap<VariableIndex, String>,
	constraint_annotations: HashMap<usize, String>,
}

impl<F: Field> ConstraintSystem<F> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a constraint and returns its position.
	pub fn add_constraint(&mut self, constraint: Constraint<F>) -> usize {
		self.constraints.push(constraint);
		self.constraints.len() - 1
	}

	pub fn constraints(&self) -> &[Constraint<F>] {
		&self.constraints
	}

	pub fn constraint(&self, index: usize) -> Option<&Constraint<F>> {
		self.constraints.get(index)
	}

	pub fn num_constraints(&self) -> usize {
		self.constraints.len()
	}

	pub const fn num_inputs(&self) -> usize {
		self.primary_input_size
	}

	/// Number of allocated variables, excluding the constant.
	pub const fn num_variables(&self) -> usize {
		self.primary_input_size + self.auxiliary_input_size
	}

	pub(crate) fn add_auxiliary_variable(&mut self) {
		self.auxiliary_input_size += 1;
	}

	pub(crate) fn set_input_partition(&mut self, primary_input_size: usize) {
		let num_variables = self.num_variables();
		assert!(primary_input_size <= num_variables);
		self.primary_input_size = primary_input_size;
		self.auxiliary_input_size = num_variables - primary_input_size;
	}

	pub fn variable_annotation(&self, variable: Variable) -> Option<&str> {
		self.variable_annotations
			.get(&variable.index())
			.map(String::as_str)
	}

	pub fn constraint_annotation(&self, index: usize) -> Option<&str> {
		self.constraint_annotations.get(&index).map(String::as_str)
	}

	pub(crate) fn annotate_variable(&mut self, variable: Variable, annotation: String) {
		self.variable_annotations
			.insert(variable.index(), annotation);
	}

	pub(crate) fn augment_variable_annotation(&mut self, variable: Variable, suffix: &str) {
		self.variable_annotations
			.entry(variable.index())
			.and_modify(|annotation| {
				annotation.push(' ');
				annotation.push_str(suffix);
			})
			.or_insert_with(|| suffix.to_string());
	}

	pub(crate) fn annotate_constraint(&mut self, index: usize, annotation: String) {
		self.constraint_annotations.insert(index, annotation);
	}

	/// Returns the position of the first constraint that does not hold, reading variable values
	/// through `value_of`.
	pub fn which_is_unsatisfied(&self, mut value_of: impl FnMut(Variable) -> F) -> Option<usize> {
		self.constraints
			.iter()
			.position(|constraint| !constraint.is_satisfied_by(&mut value_of))
	}

	pub fn is_satisfied(&self, value_of: impl FnMut(Variable) -> F) -> bool {
		self.which_is_unsatisfied(value_of).is_none()
	}

	/// Checks the constraints against a split assignment, as a proving backend receives it.
	///
	/// The lengths of both inputs must match the current partition.
	pub fn is_satisfied_by_assignment(
		&self,
		primary_input: &[F],
		auxiliary_input: &[F],
	) -> Result<bool, Error> {
		ensure!(
			primary_input.len() == self.primary_input_size,
			Error::AssignmentLengthMismatch {
				input: "primary input",
				expected: self.primary_input_size,
				got: primary_input.len(),
			}
		);
		ensure!(
			auxiliary_input.len() == self.auxiliary_input_size,
			Error::AssignmentLengthMismatch {
				input: "auxiliary input",
				expected: self.auxiliary_input_size,
				got: auxiliary_input.len(),
			}
		);

		let value_of = |variable: Variable| match variable.index() {
			0 => F::ONE,
			i if i <= primary_input.len() => primary_input[i - 1],
			i => auxiliary_input[i - 1 - primary_input.len()],
		};
		Ok(self.is_satisfied(value_of))
	}
}
