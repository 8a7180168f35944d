// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use r1cs_core::{Board, LinearCombination, Scratch, Variable, WitnessValues};
use r1cs_field::{Field, M31};
use rand::{rngs::StdRng, SeedableRng};

const N_CONSTRAINTS: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];

// Chain of products x_{i+1} = x_i * (x_i + 1), starting from a random seed value.
fn build_chain(n_constraints: usize) -> (Board<M31>, Vec<Variable>) {
	let mut board = Board::<M31>::new();
	let variables = board.allocate_variables(n_constraints + 1, "x");
	for window in variables.windows(2) {
		let shifted = board.combination(
			LinearCombination::from(window[0]).add_term(Variable::ONE, M31::ONE),
		);
		board.enforce(window[0], shifted, window[1], "");
	}
	board.set_input_partition(1).expect("one input is always allocated");
	(board, variables)
}

fn generate_chain(values: &mut impl WitnessValues<M31>, variables: &[Variable], seed: M31) {
	values.set_value(variables[0], seed);
	let mut current = seed;
	for &next in &variables[1..] {
		current *= current + M31::ONE;
		values.set_value(next, current);
	}
}

fn bench_is_satisfied(c: &mut Criterion) {
	let mut group = c.benchmark_group("is_satisfied");
	let mut rng = StdRng::seed_from_u64(0);
	for n_constraints in N_CONSTRAINTS {
		let (mut board, variables) = build_chain(n_constraints);
		generate_chain(&mut board.shared_values(), &variables, M31::random(&mut rng));
		assert!(board.is_satisfied());

		group.throughput(Throughput::Elements(n_constraints as u64));
		group.bench_function(format!("n_constraints={n_constraints}"), |bench| {
			bench.iter(|| board.is_satisfied())
		});
	}
	group.finish()
}

fn bench_scratch_witness(c: &mut Criterion) {
	let mut group = c.benchmark_group("scratch_witness");
	let mut rng = StdRng::seed_from_u64(0);
	for n_constraints in N_CONSTRAINTS {
		let (mut board, variables) = build_chain(n_constraints);
		let seed = M31::random(&mut rng);

		group.throughput(Throughput::Elements(n_constraints as u64));
		group.bench_function(format!("n_constraints={n_constraints}"), |bench| {
			bench.iter_batched(
				Scratch::new,
				|mut scratch| {
					generate_chain(&mut board.scratch(&mut scratch), &variables, seed);
					scratch
				},
				BatchSize::LargeInput,
			)
		});

		let mut scratch = Scratch::new();
		generate_chain(&mut board.scratch(&mut scratch), &variables, seed);
		board.copy_from_scratch(&scratch, variables.iter().copied());
		assert!(board.is_satisfied());
	}
	group.finish()
}

criterion_group!(satisfaction, bench_is_satisfied, bench_scratch_witness);
criterion_main!(satisfaction);
