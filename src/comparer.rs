//! Orderings the sorting engine is generic over.
//!
//! The engine is written once against [`Comparer`] and monomorphized for each implementation, so
//! neither user closures nor the primitive comparers pay for dynamic dispatch.

use core::{
	cmp::Ordering::{self, Equal, Greater, Less},
	marker::PhantomData,
};

/// Total preorder over keys of type `T`.
///
/// Implementations must not mutate the keys. They should answer consistently for the duration of
/// a single sort call. If they do not and [`CHECKED`](Comparer::CHECKED) is `true`, the engine
/// detects the violation when a partition scan reaches its bound and fails with
/// [`SortError::BadComparator`](crate::SortError::BadComparator). Either way, the engine never
/// accesses memory outside of the sequence.
pub trait Comparer<T: ?Sized> {
	/// Whether partition scans are bound-checked for bad-comparator detection.
	///
	/// Only comparers which are correct by construction set this to `false`. An incorrect
	/// comparer without checks may lead to a panic instead of an error.
	const CHECKED: bool = true;

	/// Compares `a` with `b`.
	fn compare(&mut self, a: &T, b: &T) -> Ordering;

	/// Whether `a < b`.
	#[inline]
	fn less_than(&mut self, a: &T, b: &T) -> bool {
		self.compare(a, b) == Less
	}

	/// Whether `a > b`.
	#[inline]
	fn greater_than(&mut self, a: &T, b: &T) -> bool {
		self.compare(a, b) == Greater
	}
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &mut C {
	const CHECKED: bool = C::CHECKED;

	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		(**self).compare(a, b)
	}
	#[inline]
	fn less_than(&mut self, a: &T, b: &T) -> bool {
		(**self).less_than(a, b)
	}
	#[inline]
	fn greater_than(&mut self, a: &T, b: &T) -> bool {
		(**self).greater_than(a, b)
	}
}

/// User-supplied comparison function.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<F>(pub F);

impl<T: ?Sized, F> Comparer<T> for Comparison<F>
where
	F: FnMut(&T, &T) -> Ordering,
{
	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		(self.0)(a, b)
	}
}

/// Natural ordering of keys implementing [`Ord`].
///
/// Checked, since an [`Ord`] implementation might be inconsistent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		a.cmp(b)
	}
	#[inline]
	fn less_than(&mut self, a: &T, b: &T) -> bool {
		a.lt(b)
	}
	#[inline]
	fn greater_than(&mut self, a: &T, b: &T) -> bool {
		a.gt(b)
	}
}

/// Natural ordering of keys extracted from elements.
pub struct ByKey<F, K> {
	f: F,
	key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
	/// Orders elements by the key extracted with `f`.
	#[inline]
	pub const fn new(f: F) -> Self {
		Self {
			f,
			key: PhantomData,
		}
	}
}

impl<T: ?Sized, F, K> Comparer<T> for ByKey<F, K>
where
	F: FnMut(&T) -> K,
	K: Ord,
{
	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		(self.f)(a).cmp(&(self.f)(b))
	}
	#[inline]
	fn less_than(&mut self, a: &T, b: &T) -> bool {
		(self.f)(a).lt(&(self.f)(b))
	}
	#[inline]
	fn greater_than(&mut self, a: &T, b: &T) -> bool {
		(self.f)(a).gt(&(self.f)(b))
	}
}

/// Branch-minimal comparer for primitive keys using their inlined operators.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Direct;

macro_rules! direct {
	($($t:ty)*) => {$(
		impl Comparer<$t> for Direct {
			const CHECKED: bool = false;

			#[inline(always)]
			fn compare(&mut self, a: &$t, b: &$t) -> Ordering {
				a.cmp(b)
			}
			#[inline(always)]
			fn less_than(&mut self, a: &$t, b: &$t) -> bool {
				*a < *b
			}
			#[inline(always)]
			fn greater_than(&mut self, a: &$t, b: &$t) -> bool {
				*a > *b
			}
		}
	)*};
}

direct!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize bool char);

/// Branch-minimal comparer for floating-point keys known not to be NaN.
///
/// Negative and positive zero compare equal. Only consistent once all NaNs have been moved out of
/// the range being sorted, which [`SortKey`](crate::SortKey) does for `f32` and `f64` keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NanFree;

macro_rules! nan_free {
	($($t:ty)*) => {$(
		impl Comparer<$t> for NanFree {
			const CHECKED: bool = false;

			#[inline(always)]
			fn compare(&mut self, a: &$t, b: &$t) -> Ordering {
				if *a < *b {
					Less
				} else if *a > *b {
					Greater
				} else {
					Equal
				}
			}
			#[inline(always)]
			fn less_than(&mut self, a: &$t, b: &$t) -> bool {
				*a < *b
			}
			#[inline(always)]
			fn greater_than(&mut self, a: &$t, b: &$t) -> bool {
				*a > *b
			}
		}
	)*};
}

nan_free!(f32 f64);
