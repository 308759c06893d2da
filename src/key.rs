//! Compile-time selection of the fastest comparer per key type.

use crate::{
	comparer::{Direct, NanFree, NaturalOrder},
	error::Result,
	intro_sort::intro_sort,
	nan::move_nans_to_front,
	satellite::{Lockstep, Satellite},
};
use ndarray::ArrayViewMut1;

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Key types with a built-in sorting strategy.
///
/// Integers, `bool`, and `char` are compared by [`Direct`]. For `f32` and `f64`, NaNs are moved to
/// the front first and the remainder is compared by [`NanFree`]. String slices (and `String` with
/// the `alloc` feature) use [`NaturalOrder`].
/// Other [`Ord`] types are sorted with the `*_natural` methods instead.
pub trait SortKey: Sized {
	/// Sorts `keys` and permutes `values` in lockstep.
	///
	/// The lengths must already have been checked to match.
	#[doc(hidden)]
	fn sort_keys<V: Satellite>(keys: ArrayViewMut1<'_, Self>, values: V) -> Result;
}

macro_rules! direct {
	($($t:ty)*) => {$(
		impl SortKey for $t {
			#[inline]
			fn sort_keys<V: Satellite>(keys: ArrayViewMut1<'_, Self>, values: V) -> Result {
				let len = keys.len();
				intro_sort(&mut Lockstep::new(keys, values), &mut Direct, 0..len)
			}
		}
	)*};
}

direct!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize bool char);

macro_rules! float {
	($($t:ty)*) => {$(
		impl SortKey for $t {
			#[inline]
			fn sort_keys<V: Satellite>(keys: ArrayViewMut1<'_, Self>, values: V) -> Result {
				let len = keys.len();
				let mut v = Lockstep::new(keys, values);
				let nans = move_nans_to_front(&mut v);
				intro_sort(&mut v, &mut NanFree, nans..len)
			}
		}
	)*};
}

float!(f32 f64);

#[cfg(feature = "alloc")]
impl SortKey for String {
	#[inline]
	fn sort_keys<V: Satellite>(keys: ArrayViewMut1<'_, Self>, values: V) -> Result {
		let len = keys.len();
		intro_sort(&mut Lockstep::new(keys, values), &mut NaturalOrder, 0..len)
	}
}

impl SortKey for &str {
	#[inline]
	fn sort_keys<V: Satellite>(keys: ArrayViewMut1<'_, Self>, values: V) -> Result {
		let len = keys.len();
		intro_sort(&mut Lockstep::new(keys, values), &mut NaturalOrder, 0..len)
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::SortKey;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn floats(xs: Vec<f32>) -> bool {
		let nans = xs.iter().filter(|x| x.is_nan()).count();
		let mut expected = xs.iter().copied().filter(|x| !x.is_nan()).collect::<Vec<_>>();
		expected.sort_by(|a, b| a.total_cmp(b));
		let mut array = Array1::from_vec(xs);
		f32::sort_keys(array.view_mut(), ()).unwrap();
		let (front, back) = array.view().split_at(ndarray::Axis(0), nans);
		// Signed zeros compare equal, so compare by value rather than by bits.
		front.iter().all(|x| x.is_nan()) && back.iter().copied().eq(expected.iter().copied())
	}

	#[quickcheck]
	fn strings(xs: Vec<String>) -> bool {
		let mut expected = xs.clone();
		expected.sort();
		let mut array = Array1::from_vec(xs);
		String::sort_keys(array.view_mut(), ()).unwrap();
		array.to_vec() == expected
	}

	#[test]
	fn str_slices() {
		let mut array = arr1(&["pear", "apple", "fig"]);
		<&str>::sort_keys(array.view_mut(), ()).unwrap();
		assert_eq!(array, arr1(&["apple", "fig", "pear"]));
	}

	#[test]
	fn chars_with_values() {
		let mut keys = arr1(&['c', 'a', 'b']);
		let mut values = arr1(&[3, 1, 2]);
		char::sort_keys(keys.view_mut(), values.view_mut()).unwrap();
		assert_eq!(keys, arr1(&['a', 'b', 'c']));
		assert_eq!(values, arr1(&[1, 2, 3]));
	}
}
