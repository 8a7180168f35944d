// Copyright 2024-2025 Irreducible Inc.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::{Error, Field, M31, M31_MODULUS};

#[test]
fn test_field_text_debug() {
	assert_eq!(format!("{:?}", M31::ONE), "M31(0x00000001)");
	assert_eq!(format!("{}", M31::from(0x2a)), "0x0000002a");
	assert_eq!(format!("{:?}", -M31::ONE), "M31(0x7ffffffe)");
}

#[test]
fn test_canonical_construction() {
	assert_eq!(M31::new(5).map(M31::val), Ok(5));
	assert_eq!(
		M31::new(M31_MODULUS),
		Err(Error::NotInField {
			value: M31_MODULUS as u64
		})
	);
	assert_eq!(M31::from(M31_MODULUS), M31::ZERO);
	assert_eq!(M31::from_u64(u64::MAX).val(), (u64::MAX % M31_MODULUS as u64) as u32);
}

#[test]
fn test_small_arithmetic() {
	let two = M31::from(2);
	let three = M31::from(3);
	assert_eq!(two * three, M31::from(6));
	assert_eq!(two - three, -M31::ONE);
	assert_eq!(two.double(), M31::from(4));
	assert_eq!(three.pow_vartime(4), M31::from(81));
	assert_eq!(M31::ZERO.invert(), None);
}

#[test]
fn test_random_is_canonical() {
	let mut rng = StdRng::seed_from_u64(0);
	for _ in 0..1000 {
		assert!(M31::random(&mut rng).val() < M31_MODULUS);
	}
}

fn arb_m31() -> impl Strategy<Value = M31> {
	(0..M31_MODULUS).prop_map(|val| M31::new(val).expect("range is canonical"))
}

proptest! {
	#[test]
	fn test_mul_matches_integer_reduction(a in arb_m31(), b in arb_m31()) {
		let expected = (a.val() as u64 * b.val() as u64) % M31_MODULUS as u64;
		prop_assert_eq!((a * b).val() as u64, expected);
	}

	#[test]
	fn test_add_sub_inverse(a in arb_m31(), b in arb_m31()) {
		prop_assert_eq!(a + b - b, a);
		prop_assert_eq!(a + (-a), M31::ZERO);
	}

	#[test]
	fn test_distributivity(a in arb_m31(), b in arb_m31(), c in arb_m31()) {
		prop_assert_eq!(a * (b + c), a * b + a * c);
	}

	#[test]
	fn test_invert(a in arb_m31()) {
		match a.invert() {
			Some(inv) => prop_assert_eq!(a * inv, M31::ONE),
			None => prop_assert_eq!(a, M31::ZERO),
		}
	}
}
