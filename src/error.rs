//! Failures originated by the sorting engine.
//!
//! Degenerate inputs (empty or single-element sequences) are not errors, they are already sorted.
//! A failed call leaves the sequence partially permuted but never accesses memory outside of it.

#[cfg(feature = "std")]
use std::error::Error;

use core::fmt::{self, Display, Formatter};

/// Error type of the sorting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortError {
	/// A partition scan ran into its bound without the comparator reporting the ordering it must
	/// report for a total order (e.g., it is not transitive or claims `x < x`).
	///
	/// Only comparers with [`Comparer::CHECKED`](crate::Comparer::CHECKED) detect this.
	BadComparator,

	/// Keys and values must have the same number of elements.
	LengthMismatch {
		/// Number of keys.
		keys: usize,
		/// Number of values.
		values: usize,
	},
}

impl Display for SortError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::BadComparator => write!(
				f,
				"Comparator is inconsistent: partition scan reached its bound without finding \
				 an element ordered relative to the pivot"
			),
			Self::LengthMismatch { keys, values } => write!(
				f,
				"Length mismatch: {keys} keys but {values} values; they must have the same length"
			),
		}
	}
}

#[cfg(feature = "std")]
impl Error for SortError {}

/// Result type of the sorting operations.
pub type Result<T = ()> = core::result::Result<T, SortError>;
