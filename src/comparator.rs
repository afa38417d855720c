//! Total orders that can be injected into ordered collections.
//!
//! This module provides the [`Comparator`] trait, the strategy every
//! [`TreeSet`](crate::TreeSet) and [`PersistentTreeMap`](crate::persistent::PersistentTreeMap)
//! uses to order its keys, together with a handful of ready-made orders.
//!
//! # Overview
//!
//! - [`NaturalOrder`]: delegates to the element's [`Ord`] implementation
//! - [`Reversed`]: inverts any other comparator
//! - [`ByKey`]: orders elements by an extracted [`Ord`] key (see [`comparing`])
//! - Any closure or function `Fn(&T, &T) -> Ordering`
//! - Preset functions for the primitive types (`i32_comparator`, `string_comparator`, ...)
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use treeset::comparator::{Comparator, NaturalOrder, Reversed};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_length = |left: &String, right: &String| left.len().cmp(&right.len());
//! assert_eq!(
//!     by_length.compare(&"abc".to_string(), &"de".to_string()),
//!     Ordering::Greater
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

// =============================================================================
// Comparator Definition
// =============================================================================

/// A three-way total order over values of type `T`.
///
/// Implementations must behave as a total order for the lifetime of any
/// collection they are stored in: the result for a given pair must never
/// change, `compare(a, b)` must be the reverse of `compare(b, a)`, and the
/// relation must be transitive. Collections do not verify this; a comparator
/// that breaks these rules leaves the collection's contents unspecified
/// (though never memory unsafe).
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` and `right` are equivalent under this order.
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

// =============================================================================
// NaturalOrder
// =============================================================================

/// A zero-sized comparator that delegates to [`Ord`].
///
/// This is the default comparator of [`TreeSet`](crate::TreeSet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

// =============================================================================
// Reversed
// =============================================================================

/// A comparator that reverses the order of the wrapped comparator.
///
/// # Examples
///
/// ```rust
/// use treeset::TreeSet;
/// use treeset::comparator::{NaturalOrder, Reversed};
///
/// let mut set = TreeSet::with_comparator(Reversed(NaturalOrder));
/// set.add_all([1, 3, 2]);
/// assert_eq!(set.values(), vec![3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

// =============================================================================
// ByKey
// =============================================================================

/// A comparator that orders values by a key extracted with a function.
///
/// Values whose keys are equal are equivalent, so a set ordered with `ByKey`
/// keeps at most one value per key.
///
/// Built with [`comparing`].
pub struct ByKey<T: ?Sized, F> {
    extract: F,
    marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Clone> Clone for ByKey<T, F> {
    fn clone(&self) -> Self {
        Self {
            extract: self.extract.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for ByKey<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, K, F> Comparator<T> for ByKey<T, F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.extract)(left).cmp(&(self.extract)(right))
    }
}

/// Creates a comparator ordering values by the key `extract` returns.
///
/// # Examples
///
/// ```rust
/// use treeset::TreeSet;
/// use treeset::comparator::comparing;
///
/// let mut set = TreeSet::with_comparator(comparing(|word: &&str| word.len()));
/// set.add_all(["ccc", "a", "bb", "dd"]);
///
/// // "dd" has the same length as "bb" and is treated as a duplicate.
/// assert_eq!(set.values(), vec!["a", "bb", "ccc"]);
/// ```
pub const fn comparing<T, K, F>(extract: F) -> ByKey<T, F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey {
        extract,
        marker: PhantomData,
    }
}

// =============================================================================
// Primitive Presets
// =============================================================================

macro_rules! ord_comparators {
    ($($primitive:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Ascending comparator for `" $primitive "`."]
                #[inline]
                #[must_use]
                #[allow(clippy::trivially_copy_pass_by_ref)]
                pub fn [<$primitive _comparator>](left: &$primitive, right: &$primitive) -> Ordering {
                    left.cmp(right)
                }
            )*
        }
    };
}

macro_rules! float_comparators {
    ($($primitive:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Ascending comparator for `" $primitive "` using the IEEE 754 total order."]
                ///
                /// `-0.0` sorts before `+0.0` and NaN values sort after every number,
                /// so the order stays total.
                #[inline]
                #[must_use]
                #[allow(clippy::trivially_copy_pass_by_ref)]
                pub fn [<$primitive _comparator>](left: &$primitive, right: &$primitive) -> Ordering {
                    left.total_cmp(right)
                }
            )*
        }
    };
}

ord_comparators!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool,
);

float_comparators!(f32, f64);

/// Ascending comparator for `i64`, the integer type used by
/// [`TreeSet::with_int_comparator`](crate::TreeSet::with_int_comparator).
#[inline]
#[must_use]
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn int_comparator(left: &i64, right: &i64) -> Ordering {
    i64_comparator(left, right)
}

/// Lexicographic comparator for strings (byte-wise, as [`str`]'s [`Ord`]).
#[inline]
#[must_use]
pub fn string_comparator(left: &str, right: &str) -> Ordering {
    left.cmp(right)
}

/// Comparator type produced by [`TreeSet::with_int_comparator`](crate::TreeSet::with_int_comparator).
pub type IntComparator = fn(&i64, &i64) -> Ordering;

/// Comparator type produced by
/// [`TreeSet::with_string_comparator`](crate::TreeSet::with_string_comparator).
pub type StringComparator = fn(&String, &String) -> Ordering;

/// [`string_comparator`] specialized to owned `String` elements.
#[inline]
#[must_use]
#[allow(clippy::ptr_arg)]
pub fn owned_string_comparator(left: &String, right: &String) -> Ordering {
    string_comparator(left, right)
}

// =============================================================================
// Tests
// =============================================================================
