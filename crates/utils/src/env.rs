// Copyright 2024-2025 Irreducible Inc.

const TRUTHY: [&str; 7] = ["1", "on", "ON", "true", "TRUE", "yes", "YES"];

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|val| is_truthy(&val))
}

fn is_truthy(val: &str) -> bool {
	TRUTHY.contains(&val)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truthy_values() {
		for val in TRUTHY {
			assert!(is_truthy(val));
		}
		for val in ["", "0", "off", "false", "True", "y"] {
			assert!(!is_truthy(val));
		}
	}

	#[test]
	fn test_unset_flag() {
		assert!(!boolean_env_flag_set("R1CS_UTILS_TEST_FLAG_THAT_IS_NEVER_SET"));
	}
}
