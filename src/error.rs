//! Error types for fallible set construction.
//!
//! Ordinary set operations never fail: duplicate inserts are idempotent and
//! removing an absent element is a no-op. The only fallible entry point is
//! [`TreeSet::try_from_sorted`](crate::TreeSet::try_from_sorted), which
//! rejects input that is not strictly ascending under the set's comparator.

use std::fmt;

/// Represents input to a sorted bulk constructor that is not strictly ascending.
///
/// # Examples
///
/// ```rust
/// use treeset::TreeSet;
/// use treeset::comparator::NaturalOrder;
/// use treeset::error::SortedInputError;
///
/// let error = TreeSet::try_from_sorted(NaturalOrder, [1, 3, 2]).unwrap_err();
/// assert_eq!(error, SortedInputError::OutOfOrder { index: 2 });
/// assert_eq!(
///     format!("{error}"),
///     "element at index 2 orders before its predecessor"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortedInputError {
    /// The element at `index` is equivalent to the element before it.
    Duplicate {
        /// Zero-based position of the offending element.
        index: usize,
    },
    /// The element at `index` orders before the element before it.
    OutOfOrder {
        /// Zero-based position of the offending element.
        index: usize,
    },
}

impl SortedInputError {
    /// Returns the zero-based position of the offending element.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Duplicate { index } | Self::OutOfOrder { index } => *index,
        }
    }
}

impl fmt::Display for SortedInputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { index } => write!(
                formatter,
                "element at index {index} is equivalent to its predecessor"
            ),
            Self::OutOfOrder { index } => write!(
                formatter,
                "element at index {index} orders before its predecessor"
            ),
        }
    }
}

impl std::error::Error for SortedInputError {}
