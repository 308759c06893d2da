//! Satellite values permuted in lockstep with the keys.

use crate::error::{Result, SortError};
use core::ptr;
use ndarray::ArrayViewMut1;
use tracing::debug;

/// Sequence of values index-aligned with the keys being sorted.
///
/// Values never take part in comparisons. Every permutation the engine applies to the keys is
/// applied to the satellite at the same indices. The unit type `()` is the empty satellite of a
/// keys-only sort, for which all operations compile to nothing.
pub trait Satellite {
	/// Number of values or `None` if the satellite is empty.
	fn len(&self) -> Option<usize>;

	/// Swaps the values at `a` and `b`.
	fn swap(&mut self, a: usize, b: usize);

	/// Moves the value at `hi` to `lo` while shifting the values in `lo..hi` one place up.
	fn rotate_right(&mut self, lo: usize, hi: usize);
}

impl Satellite for () {
	#[inline(always)]
	fn len(&self) -> Option<usize> {
		None
	}
	#[inline(always)]
	fn swap(&mut self, _a: usize, _b: usize) {}
	#[inline(always)]
	fn rotate_right(&mut self, _lo: usize, _hi: usize) {}
}

impl<V> Satellite for ArrayViewMut1<'_, V> {
	#[inline]
	fn len(&self) -> Option<usize> {
		Some(ArrayViewMut1::len(self))
	}
	#[inline]
	fn swap(&mut self, a: usize, b: usize) {
		ArrayViewMut1::swap(self, a, b);
	}
	#[inline]
	fn rotate_right(&mut self, lo: usize, hi: usize) {
		rotate_right(self, lo, hi);
	}
}

/// Keys together with their satellite. All moves go through here, so the values undergo exactly
/// the permutation the keys undergo.
pub(crate) struct Lockstep<'a, T, V> {
	pub keys: ArrayViewMut1<'a, T>,
	pub values: V,
}

impl<'a, T, V: Satellite> Lockstep<'a, T, V> {
	#[inline]
	pub fn new(keys: ArrayViewMut1<'a, T>, values: V) -> Self {
		Self { keys, values }
	}
	/// Pairs `keys` with `values` if both have the same length.
	pub fn try_new(keys: ArrayViewMut1<'a, T>, values: V) -> Result<Self> {
		match values.len() {
			Some(len) if len != keys.len() => {
				debug!(keys = keys.len(), values = len, "keys and values differ in length");
				Err(SortError::LengthMismatch {
					keys: keys.len(),
					values: len,
				})
			}
			_ => Ok(Self::new(keys, values)),
		}
	}
	#[inline]
	pub fn len(&self) -> usize {
		self.keys.len()
	}
	#[inline]
	pub fn swap(&mut self, a: usize, b: usize) {
		self.keys.swap(a, b);
		self.values.swap(a, b);
	}
	#[inline]
	pub fn rotate_right(&mut self, lo: usize, hi: usize) {
		rotate_right(&mut self.keys, lo, hi);
		self.values.rotate_right(lo, hi);
	}
}

/// Moves `v[hi]` to `v[lo]` while shifting `v[lo..hi]` one place up.
///
/// Calls no user code, so no element can be observed while it is held out of `v`.
///
/// # Panics
///
/// Panics if `lo > hi` or `hi >= v.len()`.
pub(crate) fn rotate_right<T>(v: &mut ArrayViewMut1<'_, T>, lo: usize, hi: usize) {
	assert!(lo <= hi && hi < v.len(), "rotation out of bounds");
	if lo == hi {
		return;
	}
	// SAFETY: `lo < hi < len` was asserted, so all indices are in bounds. Elements `i` and `i + 1`
	// never alias. The element read into `tmp` is written back exactly once into the slot vacated
	// by the shift, and nothing between the read and the write can panic.
	unsafe {
		let tmp = ptr::read(v.uget(hi));
		for i in (lo..hi).rev() {
			let src = v.uget_mut(i) as *mut T;
			let dst = v.uget_mut(i + 1) as *mut T;
			ptr::copy_nonoverlapping(src, dst, 1);
		}
		ptr::write(v.uget_mut(lo), tmp);
	}
}
