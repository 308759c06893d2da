//! Allocation-free introspective sorting ([introsort]) of keys and, optionally, index-aligned
//! values for contiguous slices and for (sub)views into *n*-dimensional arrays with arbitrary
//! memory layout (e.g., non-contiguous).
//!
//! The algorithm is written once against the [`Comparer`] trait and monomorphized for user
//! closures, the natural ordering of [`Ord`] types, and branch-minimal comparers of primitive key
//! types selected by [`SortKey`]. Floating-point keys are sorted with all NaNs moved to the front.
//!
//! # Example
//!
//! ```
//! use ndarray_introsort::{
//! 	Introsort1Ext,
//! 	ndarray::{arr2, s},
//! };
//!
//! // 2-dimensional array of 4 rows and 3 columns.
//! let mut v = arr2(&[[38, 9, 3],   // row 0, axis 0
//!                    [-5, 4, 1],   // row 1, axis 0
//!                    [ 8, 3, 2],   // row 2, axis 0
//!                    [ 4, 9, 0]]); // row 3, axis 0
//!
//! // Sort the first column while permuting the last column in lockstep.
//! let (mut keys, mut values) = v.multi_slice_mut((s![.., 0], s![.., 2]));
//! keys.introsort_pairs(&mut values).unwrap();
//!
//! assert!(v == arr2(&[[-5, 9, 1],
//!                     [ 4, 4, 0],
//!                     [ 8, 3, 2],
//!                     [38, 9, 3]]));
//! //                        \
//! //                  column 1 untouched
//! ```
//!
//! Contiguous slices are sorted with the free functions:
//!
//! ```
//! let mut keys = [2.0, f64::NAN, -1.0, 0.5];
//! let mut values = ['c', 'n', 'a', 'b'];
//! ndarray_introsort::sort_pairs(&mut keys, &mut values).unwrap();
//! assert!(keys[0].is_nan());
//! assert_eq!(keys[1..], [-1.0, 0.5, 2.0]);
//! assert_eq!(values, ['n', 'a', 'b', 'c']);
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Sorting (unstable) |
//! |----------|------------|--------------------|
//! | Time     | Best       | *O*(*n* log *n*)   |
//! | Time     | Average    | *O*(*n* log *n*)   |
//! | Time     | Worst      | *O*(*n* log *n*)   |
//! | Space    | Best       | *O*(1)             |
//! | Space    | Average    | *O*(log *n*)       |
//! | Space    | Worst      | *O*(log *n*)       |
//!
//! Sub-ranges of up to 16 elements are finished by insertion sort (or a fixed sequence of
//! compare-and-swaps for two or three elements). Longer ones are partitioned around the median of
//! their first, middle, and last element. After `2 * floor(log2(n)) + 2` partitioning levels, the
//! remaining sub-range is heapsorted. The shorter side of each partition is sorted recursively
//! and the longer one iteratively, which bounds the stack depth.
//!
//! The sort is unstable (i.e., may reorder equal elements). Its output, including ties under
//! inconsistent comparators, is deterministic.
//!
//! # Errors
//!
//! Comparers which may be inconsistent (user closures, [`Ord`] implementations) are checked at the
//! bounds of each partition scan. Instead of running past the range, the sort stops with
//! [`SortError::BadComparator`] and leaves the sequence partially permuted. Sorting pairs fails
//! with [`SortError::LengthMismatch`] before touching anything if keys and values differ in length.
//!
//! [introsort]: https://en.wikipedia.org/wiki/Introsort
//!
//! # Features
//!
//!   * `alloc` for sorting `String` keys via [`SortKey`]. Enabled by `std`.
//!   * `std` for `std::error::Error` on [`SortError`]. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod comparer;
mod error;
mod heap_sort;
mod insertion_sort;
mod intro_sort;
mod key;
mod nan;
mod partition;
mod satellite;

pub use crate::{
	comparer::{ByKey, Comparer, Comparison, Direct, NanFree, NaturalOrder},
	error::{Result, SortError},
	intro_sort::INTROSORT_SIZE_THRESHOLD,
	key::SortKey,
	satellite::Satellite,
};

use crate::{intro_sort::intro_sort, satellite::Lockstep};
use core::cmp::Ordering;
use ndarray::{ArrayBase, ArrayViewMut1, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing unstable introsort of its elements,
/// optionally permuting a second array of values in lockstep.
pub trait Introsort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array with the comparer [`SortKey`] selects for `A`.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* \* log(*n*)) worst-case.
	///
	/// For `f32` and `f64`, all NaNs end up in front, followed by the remaining keys in ascending
	/// order.
	///
	/// # Errors
	///
	/// Never fails for the built-in key types, see [`SortKey`].
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{Introsort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.introsort().unwrap();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn introsort(&mut self) -> Result
	where
		A: SortKey,
		S: DataMut;
	/// Sorts the array by the natural ordering of `A`.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* \* log(*n*)) worst-case.
	///
	/// # Errors
	///
	/// Fails with [`SortError::BadComparator`] if the [`Ord`] implementation of `A` turns out to
	/// be inconsistent.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{Introsort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[(2, 'b'), (1, 'z'), (2, 'a')]);
	///
	/// v.introsort_natural().unwrap();
	/// assert!(v == arr1(&[(1, 'z'), (2, 'a'), (2, 'b')]));
	/// ```
	fn introsort_natural(&mut self) -> Result
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* \* log(*n*)) worst-case.
	///
	/// The comparator function should define a total ordering for the elements in the array. If
	/// it contradicts itself in a way which would make a partition scan leave its range, the sort
	/// stops with [`SortError::BadComparator`]. Other inconsistencies leave the order of the
	/// elements unspecified. Either way, the elements remain a permutation of the input.
	///
	/// # Errors
	///
	/// Fails with [`SortError::BadComparator`] as described above.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{Introsort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.introsort_by(|a, b| a.cmp(b)).unwrap();
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.introsort_by(|a, b| b.cmp(a)).unwrap();
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn introsort_by<F>(&mut self, compare: F) -> Result
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*m* \* *n* \* log(*n*)) worst-case, where the key function is
	/// *O*(*m*).
	///
	/// # Errors
	///
	/// Fails with [`SortError::BadComparator`] if the [`Ord`] implementation of `K` turns out to
	/// be inconsistent.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{Introsort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.introsort_by_key(|k| k.abs()).unwrap();
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn introsort_by_key<K, F>(&mut self, f: F) -> Result
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array with a comparer object.
	///
	/// Pass `&mut comparer` to keep using a stateful comparer afterwards.
	///
	/// # Errors
	///
	/// Fails with [`SortError::BadComparator`] if the comparer is [checked](Comparer::CHECKED)
	/// and turns out to be inconsistent.
	///
	/// # Examples
	///
	/// ```
	/// use core::cmp::Ordering;
	/// use ndarray_introsort::{Comparer, Introsort1Ext, ndarray::arr1};
	///
	/// struct Counting(usize);
	///
	/// impl Comparer<u8> for Counting {
	/// 	fn compare(&mut self, a: &u8, b: &u8) -> Ordering {
	/// 		self.0 += 1;
	/// 		a.cmp(b)
	/// 	}
	/// }
	///
	/// let mut v = arr1(&[3u8, 1, 2]);
	/// let mut counting = Counting(0);
	/// v.introsort_with(&mut counting).unwrap();
	/// assert!(v == arr1(&[1, 2, 3]));
	/// assert_eq!(counting.0, 3);
	/// ```
	fn introsort_with<C>(&mut self, comparer: C) -> Result
	where
		C: Comparer<A>,
		S: DataMut;
	/// Sorts the array with the comparer [`SortKey`] selects for `A` and permutes `values` in
	/// lockstep.
	///
	/// Values never take part in comparisons. Whichever permutation is applied to the keys is
	/// applied to the values, so every key stays paired with its original value.
	///
	/// # Errors
	///
	/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
	/// length.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{Introsort1Ext, ndarray::arr1};
	///
	/// let mut keys = arr1(&[3.0, 1.0, f32::NAN, 2.0]);
	/// let mut values = arr1(&["c", "a", "nan", "b"]);
	///
	/// keys.introsort_pairs(&mut values).unwrap();
	/// assert!(keys[0].is_nan());
	/// assert!(values == arr1(&["nan", "a", "b", "c"]));
	/// ```
	fn introsort_pairs<B, S2>(&mut self, values: &mut ArrayBase<S2, Ix1>) -> Result
	where
		A: SortKey,
		S: DataMut,
		S2: DataMut<Elem = B>;
	/// Sorts the array by the natural ordering of `A` and permutes `values` in lockstep.
	///
	/// # Errors
	///
	/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
	/// length and with [`SortError::BadComparator`] if the [`Ord`] implementation of `A` turns out
	/// to be inconsistent.
	fn introsort_pairs_natural<B, S2>(&mut self, values: &mut ArrayBase<S2, Ix1>) -> Result
	where
		A: Ord,
		S: DataMut,
		S2: DataMut<Elem = B>;
	/// Sorts the array with a comparator function and permutes `values` in lockstep.
	///
	/// # Errors
	///
	/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
	/// length and with [`SortError::BadComparator`] as described for
	/// [`introsort_by`](Introsort1Ext::introsort_by).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{Introsort1Ext, ndarray::arr1};
	///
	/// let mut keys = arr1(&[1, 3, 2]);
	/// let mut values = arr1(&['a', 'c', 'b']);
	///
	/// keys.introsort_pairs_by(&mut values, |a, b| b.cmp(a)).unwrap();
	/// assert!(keys == arr1(&[3, 2, 1]));
	/// assert!(values == arr1(&['c', 'b', 'a']));
	/// ```
	fn introsort_pairs_by<B, S2, F>(
		&mut self,
		values: &mut ArrayBase<S2, Ix1>,
		compare: F,
	) -> Result
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		S2: DataMut<Elem = B>;
	/// Sorts the array with a comparer object and permutes `values` in lockstep.
	///
	/// # Errors
	///
	/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
	/// length and with [`SortError::BadComparator`] if the comparer is
	/// [checked](Comparer::CHECKED) and turns out to be inconsistent.
	fn introsort_pairs_with<B, S2, C>(
		&mut self,
		values: &mut ArrayBase<S2, Ix1>,
		comparer: C,
	) -> Result
	where
		C: Comparer<A>,
		S: DataMut,
		S2: DataMut<Elem = B>;
}

impl<A, S> Introsort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn introsort(&mut self) -> Result
	where
		A: SortKey,
		S: DataMut,
	{
		A::sort_keys(self.view_mut(), ())
	}
	#[inline]
	fn introsort_natural(&mut self) -> Result
	where
		A: Ord,
		S: DataMut,
	{
		sort_view(self.view_mut(), (), NaturalOrder)
	}
	#[inline]
	fn introsort_by<F>(&mut self, compare: F) -> Result
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		sort_view(self.view_mut(), (), Comparison(compare))
	}
	#[inline]
	fn introsort_by_key<K, F>(&mut self, f: F) -> Result
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		sort_view(self.view_mut(), (), ByKey::new(f))
	}
	#[inline]
	fn introsort_with<C>(&mut self, comparer: C) -> Result
	where
		C: Comparer<A>,
		S: DataMut,
	{
		sort_view(self.view_mut(), (), comparer)
	}

	#[inline]
	fn introsort_pairs<B, S2>(&mut self, values: &mut ArrayBase<S2, Ix1>) -> Result
	where
		A: SortKey,
		S: DataMut,
		S2: DataMut<Elem = B>,
	{
		let Lockstep { keys, values } = Lockstep::try_new(self.view_mut(), values.view_mut())?;
		A::sort_keys(keys, values)
	}
	#[inline]
	fn introsort_pairs_natural<B, S2>(&mut self, values: &mut ArrayBase<S2, Ix1>) -> Result
	where
		A: Ord,
		S: DataMut,
		S2: DataMut<Elem = B>,
	{
		sort_view(self.view_mut(), values.view_mut(), NaturalOrder)
	}
	#[inline]
	fn introsort_pairs_by<B, S2, F>(
		&mut self,
		values: &mut ArrayBase<S2, Ix1>,
		compare: F,
	) -> Result
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
		S2: DataMut<Elem = B>,
	{
		sort_view(self.view_mut(), values.view_mut(), Comparison(compare))
	}
	#[inline]
	fn introsort_pairs_with<B, S2, C>(
		&mut self,
		values: &mut ArrayBase<S2, Ix1>,
		comparer: C,
	) -> Result
	where
		C: Comparer<A>,
		S: DataMut,
		S2: DataMut<Elem = B>,
	{
		sort_view(self.view_mut(), values.view_mut(), comparer)
	}
}

/// Sorts `keys` with the comparer [`SortKey`] selects for `A`.
///
/// See [`Introsort1Ext::introsort`].
///
/// # Errors
///
/// Never fails for the built-in key types.
#[inline]
pub fn sort<A: SortKey>(keys: &mut [A]) -> Result {
	A::sort_keys(ArrayViewMut1::from(keys), ())
}

/// Sorts `keys` by their natural ordering.
///
/// See [`Introsort1Ext::introsort_natural`].
///
/// # Errors
///
/// Fails with [`SortError::BadComparator`] if the [`Ord`] implementation of `A` turns out to be
/// inconsistent.
#[inline]
pub fn sort_natural<A: Ord>(keys: &mut [A]) -> Result {
	sort_view(ArrayViewMut1::from(keys), (), NaturalOrder)
}

/// Sorts `keys` with a comparator function.
///
/// See [`Introsort1Ext::introsort_by`].
///
/// # Errors
///
/// Fails with [`SortError::BadComparator`] if the comparator turns out to be inconsistent.
#[inline]
pub fn sort_by<A, F>(keys: &mut [A], compare: F) -> Result
where
	F: FnMut(&A, &A) -> Ordering,
{
	sort_view(ArrayViewMut1::from(keys), (), Comparison(compare))
}

/// Sorts `keys` with a key extraction function.
///
/// See [`Introsort1Ext::introsort_by_key`].
///
/// # Errors
///
/// Fails with [`SortError::BadComparator`] if the [`Ord`] implementation of `K` turns out to be
/// inconsistent.
#[inline]
pub fn sort_by_key<A, K, F>(keys: &mut [A], f: F) -> Result
where
	K: Ord,
	F: FnMut(&A) -> K,
{
	sort_view(ArrayViewMut1::from(keys), (), ByKey::new(f))
}

/// Sorts `keys` with a comparer object.
///
/// See [`Introsort1Ext::introsort_with`].
///
/// # Errors
///
/// Fails with [`SortError::BadComparator`] if the comparer is [checked](Comparer::CHECKED) and
/// turns out to be inconsistent.
#[inline]
pub fn sort_with<A, C: Comparer<A>>(keys: &mut [A], comparer: C) -> Result {
	sort_view(ArrayViewMut1::from(keys), (), comparer)
}

/// Sorts `keys` with the comparer [`SortKey`] selects for `A` and permutes `values` in lockstep.
///
/// See [`Introsort1Ext::introsort_pairs`].
///
/// # Errors
///
/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
/// length.
#[inline]
pub fn sort_pairs<A: SortKey, B>(keys: &mut [A], values: &mut [B]) -> Result {
	let Lockstep { keys, values } =
		Lockstep::try_new(ArrayViewMut1::from(keys), ArrayViewMut1::from(values))?;
	A::sort_keys(keys, values)
}

/// Sorts `keys` by their natural ordering and permutes `values` in lockstep.
///
/// See [`Introsort1Ext::introsort_pairs_natural`].
///
/// # Errors
///
/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
/// length and with [`SortError::BadComparator`] if the [`Ord`] implementation of `A` turns out to
/// be inconsistent.
#[inline]
pub fn sort_pairs_natural<A: Ord, B>(keys: &mut [A], values: &mut [B]) -> Result {
	sort_view(ArrayViewMut1::from(keys), ArrayViewMut1::from(values), NaturalOrder)
}

/// Sorts `keys` with a comparator function and permutes `values` in lockstep.
///
/// See [`Introsort1Ext::introsort_pairs_by`].
///
/// # Errors
///
/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
/// length and with [`SortError::BadComparator`] if the comparator turns out to be inconsistent.
#[inline]
pub fn sort_pairs_by<A, B, F>(keys: &mut [A], values: &mut [B], compare: F) -> Result
where
	F: FnMut(&A, &A) -> Ordering,
{
	sort_view(
		ArrayViewMut1::from(keys),
		ArrayViewMut1::from(values),
		Comparison(compare),
	)
}

/// Sorts `keys` with a comparer object and permutes `values` in lockstep.
///
/// See [`Introsort1Ext::introsort_pairs_with`].
///
/// # Errors
///
/// Fails with [`SortError::LengthMismatch`] before permuting anything if `values` differs in
/// length and with [`SortError::BadComparator`] if the comparer is [checked](Comparer::CHECKED)
/// and turns out to be inconsistent.
#[inline]
pub fn sort_pairs_with<A, B, C: Comparer<A>>(
	keys: &mut [A],
	values: &mut [B],
	comparer: C,
) -> Result {
	sort_view(ArrayViewMut1::from(keys), ArrayViewMut1::from(values), comparer)
}

/// Sorts `keys` with `comparer` after checking `values` for a matching length.
fn sort_view<A, V, C>(keys: ArrayViewMut1<'_, A>, values: V, mut comparer: C) -> Result
where
	V: Satellite,
	C: Comparer<A>,
{
	let len = keys.len();
	intro_sort(&mut Lockstep::try_new(keys, values)?, &mut comparer, 0..len)
}
