// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("primary input size {requested} exceeds the number of allocated variables {allocated}")]
	InputPartitionTooLarge { requested: usize, allocated: usize },

	#[error(
		"constraint {index} is not satisfied ({})",
		.annotation.as_deref().unwrap_or("no annotation")
	)]
	Unsatisfied {
		index: usize,
		annotation: Option<String>,
	},

	#[error("{input} has {got} values, expected {expected}")]
	AssignmentLengthMismatch {
		input: &'static str,
		expected: usize,
		got: usize,
	},
}
