// Copyright 2024-2025 Irreducible Inc.

mod diagnostics;
mod values;

pub use diagnostics::VariableDump;
use r1cs_field::Field;
use r1cs_utils::ensure;
use tracing::instrument;
pub use values::{Scratch, ScratchValues, SharedValues, WitnessValues};

use crate::{
	config::BoardConfig,
	constraint_system::{Constraint, ConstraintSystem},
	error::Error,
	linear_combination::{LinearCombination, LinearExpression},
	variable::{LinearCombinationIndex, Variable, VariableIndex},
};

/// Builder for a rank-1 constraint system and the store for its witness.
///
/// Gadgets drive a board in two phases. During the build phase they allocate variables and
/// combination slots and register constraints; during the witness phase they write values,
/// either directly into the shared table or, from concurrent workers, into a per-worker
/// [`Scratch`] buffer through [`Board::scratch`].
///
/// Variable 0 is the constant one. Its value is always read from `constant_term`, never from
/// the raw slot 0 of the shared table. The raw slot starts out as one but is zeroed by
/// [`Board::reset_shared_values`], and [`Board::full_assignment`] exposes it as is.
#[derive(Debug, Clone)]
pub struct Board<F: Field> {
	constant_term: F,
	values: Vec<F>,
	lc_values: Vec<F>,
	next_free_variable: VariableIndex,
	next_free_combination: usize,
	constraint_system: ConstraintSystem<F>,
	config: BoardConfig,
}

impl<F: Field> Default for Board<F> {
	fn default() -> Self {
		Self::new()
	}
}

impl<F: Field> Board<F> {
	pub fn new() -> Self {
		Self::with_config(BoardConfig::default())
	}

	pub fn with_config(config: BoardConfig) -> Self {
		let mut constraint_system = ConstraintSystem::new();
		if config.diagnostics {
			constraint_system.annotate_variable(Variable::ONE, "ONE".to_string());
		}
		Self {
			constant_term: F::ONE,
			values: vec![F::ONE],
			lc_values: Vec::new(),
			next_free_variable: 1,
			next_free_combination: 0,
			constraint_system,
			config,
		}
	}

	pub const fn config(&self) -> &BoardConfig {
		&self.config
	}

	pub const fn constant_term(&self) -> F {
		self.constant_term
	}

	pub const fn next_free_variable_index(&self) -> VariableIndex {
		self.next_free_variable
	}

	pub const fn next_free_combination_index(&self) -> usize {
		self.next_free_combination
	}

	pub const fn constraint_system(&self) -> &ConstraintSystem<F> {
		&self.constraint_system
	}

	/// Allocates a fresh variable with value zero.
	///
	/// New variables are auxiliary until [`Board::set_input_partition`] moves a prefix of them
	/// into the primary input.
	pub fn allocate_variable(&mut self, annotation: impl ToString) -> Variable {
		let variable = Variable::from_index(self.next_free_variable);
		self.values.push(F::ZERO);
		self.next_free_variable += 1;
		self.constraint_system.add_auxiliary_variable();
		if let Some(annotation) = self.checked_annotation(annotation) {
			self.constraint_system
				.annotate_variable(variable, annotation);
		}
		debug_assert_eq!(self.values.len(), self.next_free_variable);
		variable
	}

	/// Allocates `count` consecutive variables annotated `{prefix}_0`, `{prefix}_1`, ...
	pub fn allocate_variables(&mut self, count: usize, prefix: impl ToString) -> Vec<Variable> {
		let prefix = prefix.to_string();
		(0..count)
			.map(|i| {
				if self.config.diagnostics {
					self.allocate_variable(format!("{prefix}_{i}"))
				} else {
					self.allocate_variable("")
				}
			})
			.collect()
	}

	pub fn allocate_combination_slot(&mut self) -> LinearCombinationIndex {
		let index = LinearCombinationIndex::from_index(self.next_free_combination);
		self.lc_values.push(F::ZERO);
		self.next_free_combination += 1;
		debug_assert_eq!(self.lc_values.len(), self.next_free_combination);
		index
	}

	/// Turns a combination into an expression, allocating a cache slot unless the combination
	/// is exactly `1 * variable`, in which case the bare variable is used.
	pub fn combination(&mut self, combination: LinearCombination<F>) -> LinearExpression<F> {
		match combination.as_variable() {
			Some(variable) => LinearExpression::variable(variable),
			None => LinearExpression::with_slot(self.allocate_combination_slot(), combination),
		}
	}

	pub fn add_constraint(&mut self, constraint: Constraint<F>, annotation: impl ToString) {
		let annotation = self.checked_annotation(annotation);
		let index = self.constraint_system.add_constraint(constraint);
		if let Some(annotation) = annotation {
			self.constraint_system
				.annotate_constraint(index, annotation);
		}
	}

	/// Registers `a * b = c`.
	pub fn enforce(
		&mut self,
		a: impl Into<LinearExpression<F>>,
		b: impl Into<LinearExpression<F>>,
		c: impl Into<LinearExpression<F>>,
		annotation: impl ToString,
	) {
		self.add_constraint(Constraint::new(a, b, c), annotation);
	}

	/// Appends `suffix` to the annotation of `variable`, separated by a space.
	///
	/// Does nothing without diagnostics.
	pub fn augment_variable_annotation(&mut self, variable: Variable, suffix: &str) {
		if self.config.diagnostics {
			self.expect_variable(variable);
			self.constraint_system
				.augment_variable_annotation(variable, suffix);
		}
	}

	/// Reads the shared value of `variable`.
	///
	/// # Panics
	///
	/// If `variable` was not allocated by this board.
	#[track_caller]
	pub fn get_value(&self, variable: Variable) -> F {
		if variable.is_constant() {
			return self.constant_term;
		}
		self.expect_variable(variable);
		self.values[variable.index()]
	}

	/// Writes the shared value of `variable`.
	///
	/// # Panics
	///
	/// If `variable` is the constant, or was not allocated by this board.
	#[track_caller]
	pub fn set_value(&mut self, variable: Variable, value: F) {
		assert!(!variable.is_constant(), "the constant variable cannot be assigned");
		self.expect_variable(variable);
		self.values[variable.index()] = value;
	}

	/// Reads the shared value of `expression`.
	///
	/// Bare variables read the variable; combinations read their cache slot.
	#[track_caller]
	pub fn get_expression_value(&self, expression: &LinearExpression<F>) -> F {
		match expression {
			LinearExpression::Variable(variable) => self.get_value(*variable),
			LinearExpression::Combination { index, .. } => {
				self.expect_combination(*index);
				self.lc_values[index.index()]
			}
		}
	}

	#[track_caller]
	pub fn set_expression_value(&mut self, expression: &LinearExpression<F>, value: F) {
		match expression {
			LinearExpression::Variable(variable) => self.set_value(*variable, value),
			LinearExpression::Combination { index, .. } => {
				self.expect_combination(*index);
				self.lc_values[index.index()] = value;
			}
		}
	}

	/// Value access against the shared tables.
	pub fn shared_values(&mut self) -> SharedValues<'_, F> {
		SharedValues::new(self)
	}

	/// Value access against a caller-owned scratch buffer.
	///
	/// Only borrows the board immutably, so any number of workers can each hold one at the same
	/// time. Nothing written through it reaches the shared tables until the caller transfers it
	/// with [`Board::copy_from_scratch`].
	pub fn scratch<'a>(&'a self, scratch: &'a mut Scratch<F>) -> ScratchValues<'a, F> {
		ScratchValues::new(self, scratch)
	}

	/// Copies the scratch values of `variables` into the shared table.
	///
	/// Variables never touched through the scratch buffer are copied as zero.
	#[track_caller]
	pub fn copy_from_scratch(
		&mut self,
		scratch: &Scratch<F>,
		variables: impl IntoIterator<Item = Variable>,
	) {
		for variable in variables {
			let value = scratch.value(variable).unwrap_or(F::ZERO);
			self.set_value(variable, value);
		}
	}

	/// Overwrites every slot of the shared value table, slot 0 included, with zero.
	///
	/// The constant term, the combination cache and scratch buffers are left alone.
	pub fn reset_shared_values(&mut self) {
		self.values.fill(F::ZERO);
	}

	/// Whether every constraint holds for the shared values.
	#[instrument(skip_all, name = "Board::is_satisfied", level = "debug")]
	pub fn is_satisfied(&self) -> bool {
		self.which_is_unsatisfied().is_none()
	}

	/// Returns the position of the first constraint that fails for the shared values.
	///
	/// With diagnostics the failing constraint and its evaluated sides are logged.
	pub fn which_is_unsatisfied(&self) -> Option<usize> {
		let value_of = |variable: Variable| self.get_value(variable);
		let index = self.constraint_system.which_is_unsatisfied(value_of)?;
		if self.config.diagnostics {
			let constraint = &self.constraint_system.constraints()[index];
			let (a, b, c) = constraint.evaluate(value_of);
			tracing::debug!(
				index,
				annotation = self.constraint_system.constraint_annotation(index),
				%a,
				%b,
				%c,
				a_expression = %constraint.a,
				b_expression = %constraint.b,
				c_expression = %constraint.c,
				"constraint not satisfied"
			);
		}
		Some(index)
	}

	/// Like [`Board::is_satisfied`], but reports the first failing constraint as an error.
	pub fn check_satisfied(&self) -> Result<(), Error> {
		match self.which_is_unsatisfied() {
			None => Ok(()),
			Some(index) => Err(Error::Unsatisfied {
				index,
				annotation: self
					.constraint_system
					.constraint_annotation(index)
					.map(ToString::to_string),
			}),
		}
	}

	pub fn num_constraints(&self) -> usize {
		self.constraint_system.num_constraints()
	}

	pub const fn num_inputs(&self) -> usize {
		self.constraint_system.num_inputs()
	}

	/// Number of allocated variables, excluding the constant.
	pub const fn num_variables(&self) -> usize {
		self.next_free_variable - 1
	}

	/// Declares the first `primary_input_size` allocated variables public and the rest private.
	///
	/// Call once, after allocation is finished and before extracting inputs.
	pub fn set_input_partition(&mut self, primary_input_size: usize) -> Result<(), Error> {
		ensure!(
			primary_input_size <= self.num_variables(),
			Error::InputPartitionTooLarge {
				requested: primary_input_size,
				allocated: self.num_variables(),
			}
		);
		self.constraint_system
			.set_input_partition(primary_input_size);
		Ok(())
	}

	/// The raw shared table, slot 0 included, in allocation order.
	pub fn full_assignment(&self) -> &[F] {
		&self.values
	}

	/// Shared values of variables `1..=num_inputs()`.
	pub fn primary_input(&self) -> &[F] {
		&self.values[1..1 + self.num_inputs()]
	}

	/// Shared values of the variables after the primary input.
	pub fn auxiliary_input(&self) -> &[F] {
		&self.values[1 + self.num_inputs()..]
	}

	/// Listing of every allocated variable with its annotation and shared value.
	///
	/// Returns `None` without diagnostics.
	pub fn variable_dump(&self) -> Option<VariableDump<'_, F>> {
		self.config
			.diagnostics
			.then(|| VariableDump::new(self))
	}

	/// Logs [`Board::variable_dump`] at `info` level.
	pub fn dump_variables(&self) {
		if let Some(dump) = self.variable_dump() {
			dump.log();
		}
	}

	fn checked_annotation(&self, annotation: impl ToString) -> Option<String> {
		if !self.config.diagnostics {
			return None;
		}
		let annotation = annotation.to_string();
		assert!(!annotation.is_empty(), "annotations are required when diagnostics are enabled");
		Some(annotation)
	}

	#[track_caller]
	fn expect_variable(&self, variable: Variable) {
		assert!(
			variable.index() < self.values.len(),
			"variable {variable} was not allocated by this board (next free index is {})",
			self.next_free_variable
		);
	}

	#[track_caller]
	fn expect_combination(&self, index: LinearCombinationIndex) {
		assert!(
			index.index() < self.lc_values.len(),
			"combination slot {index} was not allocated by this board (next free index is {})",
			self.next_free_combination
		);
	}
}
