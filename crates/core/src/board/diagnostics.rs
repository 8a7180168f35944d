// Copyright 2025 Irreducible Inc.

use std::fmt;

use r1cs_field::Field;

use super::Board;
use crate::variable::Variable;

const UNNAMED: &str = "<unnamed>";

/// Annotated listing of the shared values of a board, one allocated variable per line.
#[derive(Debug)]
pub struct VariableDump<'a, F: Field> {
	board: &'a Board<F>,
}

impl<'a, F: Field> VariableDump<'a, F> {
	pub(super) const fn new(board: &'a Board<F>) -> Self {
		Self { board }
	}

	/// `(variable, annotation, shared value)` for every allocated variable, in allocation order.
	pub fn rows(&self) -> impl Iterator<Item = (Variable, &'a str, F)> + 'a {
		let board = self.board;
		(1..board.next_free_variable).map(move |index| {
			let variable = Variable::from_index(index);
			let annotation = board
				.constraint_system
				.variable_annotation(variable)
				.unwrap_or(UNNAMED);
			(variable, annotation, board.values[index])
		})
	}

	pub(super) fn log(&self) {
		for (variable, annotation, value) in self.rows() {
			tracing::info!(index = variable.index(), annotation, %value, "variable");
		}
	}
}

impl<F: Field> fmt::Display for VariableDump<'_, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (variable, annotation, value) in self.rows() {
			writeln!(f, "{:<40} --> {value} ({variable})", annotation)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use r1cs_field::{Field, M31};

	use crate::{board::Board, config::BoardConfig, variable::Variable};

	#[test]
	fn test_dump_lists_allocated_variables() {
		let mut board = Board::<M31>::with_config(BoardConfig::with_diagnostics());
		let x = board.allocate_variable("x");
		let y = board.allocate_variable("y");
		board.augment_variable_annotation(y, "(carry)");
		board.set_value(x, M31::from(0x2a));

		let dump = board.variable_dump().expect("diagnostics are enabled");
		let rows = dump.rows().collect::<Vec<_>>();
		assert_eq!(
			rows,
			vec![(x, "x", M31::from(0x2a)), (y, "y (carry)", M31::ZERO)]
		);

		let text = dump.to_string();
		let lines = text.lines().collect::<Vec<_>>();
		assert_eq!(lines.len(), 2);
		assert!(lines[0].starts_with("x "));
		assert!(lines[0].ends_with("--> 0x0000002a (x1)"));
		assert!(lines[1].ends_with("--> 0x00000000 (x2)"));
		assert!(!text.contains(&Variable::ONE.to_string()));
		assert!(format!("{dump:?}").starts_with("VariableDump"));

		board.dump_variables();
	}
}
