//! Terminal sorts for short sub-ranges.
//!
//! All ranges are inclusive `lo..=hi` index pairs into the full sequence.

use crate::{comparer::Comparer, satellite::Lockstep, satellite::Satellite};

/// Swaps `v[a]` and `v[b]` if `v[a] > v[b]`.
///
/// Tests strictly greater rather than less so ties and inconsistent comparers never swap.
#[inline]
pub fn sort2<T, V, C>(v: &mut Lockstep<'_, T, V>, comparer: &mut C, a: usize, b: usize)
where
	V: Satellite,
	C: Comparer<T>,
{
	debug_assert_ne!(a, b);
	if comparer.greater_than(&v.keys[a], &v.keys[b]) {
		v.swap(a, b);
	}
}

/// Orders `v[a] <= v[b] <= v[c]` using exactly three unconditional compare-and-swaps.
///
/// The fixed sequence keeps the outcome deterministic even for comparers which are not transitive
/// or which report every pair as equal.
#[inline]
pub fn sort3<T, V, C>(v: &mut Lockstep<'_, T, V>, comparer: &mut C, a: usize, b: usize, c: usize)
where
	V: Satellite,
	C: Comparer<T>,
{
	sort2(v, comparer, a, b);
	sort2(v, comparer, a, c);
	sort2(v, comparer, b, c);
}

/// Sorts `v[lo..=hi]` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// Each element is inserted behind the last element it is not less than, so equal elements keep
/// their order within the range.
pub fn insertion_sort<T, V, C>(v: &mut Lockstep<'_, T, V>, comparer: &mut C, lo: usize, hi: usize)
where
	V: Satellite,
	C: Comparer<T>,
{
	for i in lo + 1..=hi {
		// Find the insertion point without moving anything, so a panicking comparer leaves the
		// keys and values untouched and in lockstep.
		let mut j = i;
		while j > lo && comparer.less_than(&v.keys[i], &v.keys[j - 1]) {
			j -= 1;
		}
		v.rotate_right(j, i);
	}
}
