// Copyright 2023-2025 Irreducible Inc.

//! Scalar fields for rank-1 constraint systems.
//!
//! The constraint board is generic over [`Field`]; this crate defines that trait together with
//! [`M31`], the prime field of order $2^{31} - 1$, which is small enough to reason about by hand
//! in tests and fast enough for witness generation.

pub mod arithmetic_traits;
pub mod error;
pub mod field;
pub mod mersenne;
#[cfg(test)]
mod tests;

pub use error::*;
pub use field::Field;
pub use mersenne::*;
