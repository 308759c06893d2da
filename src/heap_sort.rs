//! Heapsort fallback of the introsort driver.

use crate::{comparer::Comparer, satellite::Lockstep, satellite::Satellite};

/// Sorts `v[lo..=hi]` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
#[cold]
pub fn heap_sort<T, V, C>(v: &mut Lockstep<'_, T, V>, comparer: &mut C, lo: usize, hi: usize)
where
	V: Satellite,
	C: Comparer<T>,
{
	let n = hi - lo + 1;

	// Build the heap in linear time.
	for node in (0..n / 2).rev() {
		sift_down(v, comparer, lo, node, n);
	}

	// Pop maximal elements from the heap.
	for end in (1..n).rev() {
		v.swap(lo, lo + end);
		sift_down(v, comparer, lo, 0, end);
	}
}

/// Restores the heap invariant `parent >= child` below `node` of the heap `v[lo..lo + len]`.
fn sift_down<T, V, C>(
	v: &mut Lockstep<'_, T, V>,
	comparer: &mut C,
	lo: usize,
	mut node: usize,
	len: usize,
) where
	V: Satellite,
	C: Comparer<T>,
{
	loop {
		// Children of `node`.
		let mut child = 2 * node + 1;
		if child >= len {
			break;
		}

		// Choose the greater child.
		if child + 1 < len && comparer.less_than(&v.keys[lo + child], &v.keys[lo + child + 1]) {
			child += 1;
		}

		// Stop if the invariant holds at `node`.
		if !comparer.less_than(&v.keys[lo + node], &v.keys[lo + child]) {
			break;
		}

		// Swap `node` with the greater child, move one step down, and continue sifting.
		v.swap(lo + node, lo + child);
		node = child;
	}
}
