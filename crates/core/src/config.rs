// Copyright 2025 Irreducible Inc.

use r1cs_utils::env::boolean_env_flag_set;

/// Environment variable that switches diagnostics on for [`BoardConfig::from_env`].
pub const DIAGNOSTICS_ENV_FLAG: &str = "R1CS_DIAGNOSTICS";

/// Runtime options of a [`crate::board::Board`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardConfig {
	/// Track annotations for variables and constraints and enable the variable dump.
	///
	/// When disabled, annotation arguments are accepted and dropped.
	pub diagnostics: bool,
}

impl BoardConfig {
	pub const fn with_diagnostics() -> Self {
		Self { diagnostics: true }
	}

	/// Reads the configuration from the process environment.
	pub fn from_env() -> Self {
		Self {
			diagnostics: boolean_env_flag_set(DIAGNOSTICS_ENV_FLAG),
		}
	}
}
