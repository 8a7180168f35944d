// Copyright 2023-2025 Irreducible Inc.

/// Error thrown when a field operation fails.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// Thrown when trying to initialize a field element from a non-canonical representative.
	#[error("value {value:#x} is not in the field")]
	NotInField { value: u64 },
}
