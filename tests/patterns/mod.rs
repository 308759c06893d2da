//! Deterministic input patterns for exercising sorts, including adversarial ones.

use rand::{Rng, SeedableRng, rngs::StdRng};

const SEED: u64 = 0x5eed_0f_1a7e;

pub fn random(size: usize) -> Vec<i32> {
	//     .
	// : . : :
	// :.:::.::

	let mut rng = StdRng::seed_from_u64(SEED ^ size as u64);
	(0..size).map(|_| rng.random::<i32>()).collect()
}

pub fn random_few_distinct(size: usize) -> Vec<i32> {
	// :.:.:.::

	let mut rng = StdRng::seed_from_u64(SEED.rotate_left(7) ^ size as u64);
	(0..size).map(|_| rng.random_range(0..8)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
	// ......
	// ::::::

	vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
	//     .:
	//   .:::
	// .:::::

	(0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
	// :.
	// :::.
	// :::::.

	(0..size as i32).rev().collect()
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
	//   .:.
	// .:::::.

	let half = (size / 2) as i32;
	(0..half).chain((0..size as i32 - half).rev()).collect()
}

/// Musser's sequence driving median-of-three quicksort towards quadratic behavior.
pub fn median_of_three_killer(size: usize) -> Vec<i32> {
	let k = size / 2;
	let mut v = vec![0; size];
	for i in 1..=k {
		if i % 2 == 1 {
			v[i - 1] = i as i32;
			v[i] = (k + i) as i32;
		}
		v[k + i - 1] = 2 * i as i32;
	}
	if size % 2 == 1 {
		v[size - 1] = size as i32;
	}
	v
}

pub fn random_floats_with_nans(size: usize, nans: usize) -> Vec<f64> {
	let mut rng = StdRng::seed_from_u64(SEED.rotate_left(13) ^ size as u64);
	let mut v = (0..size)
		.map(|_| rng.random_range(-1e3..1e3))
		.collect::<Vec<f64>>();
	for _ in 0..nans.min(size) {
		loop {
			let i = rng.random_range(0..size);
			if !v[i].is_nan() {
				v[i] = f64::NAN;
				break;
			}
		}
	}
	v
}

pub type Pattern = fn(usize) -> Vec<i32>;

pub const ALL: [(&str, Pattern); 7] = [
	("random", random),
	("random_few_distinct", random_few_distinct),
	("all_equal", all_equal),
	("ascending", ascending),
	("descending", descending),
	("pipe_organ", pipe_organ),
	("median_of_three_killer", median_of_three_killer),
];
