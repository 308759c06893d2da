//! Median-of-three pivot selection and two-pointer partitioning.

use crate::{
	comparer::Comparer,
	error::{Result, SortError},
	insertion_sort::sort3,
	satellite::{Lockstep, Satellite},
};
use tracing::debug;

/// Partitions `v[lo..=hi]` around the median of its first, middle, and last element.
///
/// Returns the final index `p` of the pivot with `v[lo..p] <= v[p] <= v[p + 1..=hi]`.
///
/// If [`Comparer::CHECKED`], fails with [`SortError::BadComparator`] as soon as a scan is about to
/// leave the range because the comparer contradicted itself. No index outside of `lo..=hi` is
/// accessed in either case.
///
/// The range must be longer than three elements.
pub fn partition<T, V, C>(
	v: &mut Lockstep<'_, T, V>,
	comparer: &mut C,
	lo: usize,
	hi: usize,
) -> Result<usize>
where
	V: Satellite,
	C: Comparer<T>,
{
	debug_assert!(hi - lo >= 3);

	// Midpoint without overflowing `lo + hi`.
	let mid = lo + (hi - lo) / 2;

	// Median-of-three, leaving `v[lo] <= v[mid] <= v[hi]`. Both ends now act as sentinels.
	sort3(v, comparer, lo, mid, hi);

	// Park the pivot next to the upper sentinel where no swap below will touch it.
	let pivot = hi - 1;
	v.swap(mid, pivot);

	let mut left = lo;
	let mut right = pivot;
	while left < right {
		loop {
			left += 1;
			if !comparer.less_than(&v.keys[left], &v.keys[pivot]) {
				break;
			}
			// Claims `pivot < pivot`.
			if C::CHECKED && left == pivot {
				return bad_comparator(lo, hi);
			}
		}
		loop {
			right -= 1;
			if !comparer.less_than(&v.keys[pivot], &v.keys[right]) {
				break;
			}
			// Claims `pivot < v[lo]` contrary to the median-of-three.
			if C::CHECKED && right == lo {
				return bad_comparator(lo, hi);
			}
		}
		if left >= right {
			break;
		}
		v.swap(left, right);
	}

	// Put the pivot between the two partitions.
	if left != pivot {
		v.swap(left, pivot);
	}
	Ok(left)
}

#[cold]
fn bad_comparator(lo: usize, hi: usize) -> Result<usize> {
	debug!(lo, hi, "comparator contradicted itself while partitioning");
	Err(SortError::BadComparator)
}
