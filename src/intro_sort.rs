//! Introsort driver.

use crate::{
	comparer::Comparer,
	error::Result,
	heap_sort::heap_sort,
	insertion_sort::{insertion_sort, sort2, sort3},
	partition::partition,
	satellite::{Lockstep, Satellite},
};
use core::{mem, ops::Range};
use tracing::trace;

/// Sub-ranges of up to this length get sorted by the terminal sorts.
pub const INTROSORT_SIZE_THRESHOLD: usize = 16;

/// Sorts `v[range]` using introsort, which is *O*(*n* \* log(*n*)) worst-case.
///
/// Quicksort with median-of-three pivots, falling back to heapsort once the depth budget of
/// `2 * floor(log2(len)) + 2` partitioning levels is exhausted. Short sub-ranges are finished by
/// insertion sort.
pub fn intro_sort<T, V, C>(
	v: &mut Lockstep<'_, T, V>,
	comparer: &mut C,
	range: Range<usize>,
) -> Result
where
	V: Satellite,
	C: Comparer<T>,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return Ok(());
	}

	let len = range.len();
	if len < 2 {
		return Ok(());
	}

	// Limit the number of partitioning levels to `2 * (floor(log2(len)) + 1)`.
	let limit = 2 * (usize::BITS - len.leading_zeros());
	trace!(len, limit, "introsort");

	recurse(v, comparer, range.start, range.end - 1, limit)
}

/// Sorts `v[lo..=hi]` recursively.
///
/// `limit` is the number of partitioning levels left before switching to `heap_sort`. If zero,
/// this function will immediately switch to heapsort.
fn recurse<T, V, C>(
	v: &mut Lockstep<'_, T, V>,
	comparer: &mut C,
	mut lo: usize,
	mut hi: usize,
	mut limit: u32,
) -> Result
where
	V: Satellite,
	C: Comparer<T>,
{
	while hi > lo {
		let len = hi - lo + 1;

		if len <= INTROSORT_SIZE_THRESHOLD {
			match len {
				2 => sort2(v, comparer, lo, hi),
				3 => sort3(v, comparer, lo, lo + 1, hi),
				_ => insertion_sort(v, comparer, lo, hi),
			}
			return Ok(());
		}

		// Too many partitioning levels, fall back to heapsort in order to guarantee
		// `O(n * log(n))` worst-case.
		if limit == 0 {
			trace!(len, "depth limit exhausted, falling back to heapsort");
			heap_sort(v, comparer, lo, hi);
			return Ok(());
		}
		limit -= 1;

		// The pivot lands strictly inside the range, so both sides below are well-formed.
		let p = partition(v, comparer, lo, hi)?;

		// Recurse into the shorter side only in order to bound the stack depth by `O(log(n))`.
		// Then just continue with the longer side (this is akin to tail recursion).
		if p - lo < hi - p {
			recurse(v, comparer, lo, p - 1, limit)?;
			lo = p + 1;
		} else {
			recurse(v, comparer, p + 1, hi, limit)?;
			hi = p - 1;
		}
	}
	Ok(())
}
