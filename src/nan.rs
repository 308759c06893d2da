//! NaN prepass for floating-point keys.

use crate::satellite::{Lockstep, Satellite};
use tracing::trace;

/// Floating-point keys which may be NaN.
pub trait Float: Copy {
	/// Whether this is NaN.
	fn is_nan(self) -> bool;
}

impl Float for f32 {
	#[inline(always)]
	fn is_nan(self) -> bool {
		f32::is_nan(self)
	}
}

impl Float for f64 {
	#[inline(always)]
	fn is_nan(self) -> bool {
		f64::is_nan(self)
	}
}

/// Moves all NaN keys to the front in encounter order and returns their count.
///
/// Afterwards `v[..count]` holds the NaNs and `v[count..]` is NaN-free, so it can be sorted with
/// plain `<`. Single pass, *O*(*n*).
pub fn move_nans_to_front<T, V>(v: &mut Lockstep<'_, T, V>) -> usize
where
	T: Float,
	V: Satellite,
{
	let mut count = 0;
	for i in 0..v.len() {
		if v.keys[i].is_nan() {
			if i != count {
				v.swap(count, i);
			}
			count += 1;
		}
	}
	if count != 0 {
		trace!(count, "moved NaN keys to front");
	}
	count
}
