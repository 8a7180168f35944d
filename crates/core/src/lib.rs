// Copyright 2024-2025 Irreducible Inc.

//! Builder for rank-1 constraint systems.
//!
//! A [`Board`] hands out [`Variable`]s and cache slots for [`LinearExpression`]s, records
//! [`Constraint`]s of the form `a * b = c`, and stores the witness. Witness values can be written
//! directly into the board's shared tables or, from parallel workers, into private [`Scratch`]
//! buffers that are merged back explicitly.

pub mod board;
pub mod config;
pub mod constraint_system;
pub mod error;
pub mod linear_combination;
pub mod variable;

pub use board::{Board, Scratch, ScratchValues, SharedValues, VariableDump, WitnessValues};
pub use config::BoardConfig;
pub use constraint_system::{Constraint, ConstraintSystem};
pub use error::Error;
pub use linear_combination::{LinearCombination, LinearExpression};
pub use variable::{LinearCombinationIndex, Variable, VariableIndex};
