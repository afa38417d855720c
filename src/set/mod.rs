//! Ordered set with a pluggable comparator.
//!
//! This module provides [`TreeSet`], a mutable collection of unique elements
//! kept in the total order defined by a [`Comparator`]. Storage is delegated
//! to a [`PersistentTreeMap`] whose values are `()`: a key's presence is the
//! element's membership.
//!
//! # Overview
//!
//! - Elements are unique under the comparator: adding an equivalent element
//!   again is a no-op
//! - Iteration and [`TreeSet::values`] always yield ascending comparator order
//! - Set algebra ([`TreeSet::union`], [`TreeSet::difference`],
//!   [`TreeSet::intersection`] and their in-place forms) runs in time linear
//!   in the combined operand sizes (plus the map updates)
//!
//! # Time Complexity
//!
//! | Operation                | Complexity            |
//! |--------------------------|-----------------------|
//! | `insert` / `remove`      | O(log N)              |
//! | `contains`               | O(log N)              |
//! | `len` / `is_empty`       | O(1)                  |
//! | `clone` / `clear`        | O(1)                  |
//! | `values` / `iter`        | O(N)                  |
//! | `intersection`           | O(N + M + K log K)    |
//! | `in_place_intersection`  | O(N + M + R log N)    |
//! | `union`                  | O(M log(N + M))       |
//! | `difference`             | O(M log N)            |
//!
//! # Examples
//!
//! ```rust
//! use treeset::TreeSet;
//!
//! let mut set = TreeSet::with_int_comparator();
//! set.add_all([5, 1, 3, 1]);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains_all([1, 3]));
//! assert_eq!(set.values(), vec![1, 3, 5]);
//! assert_eq!(set.to_string(), "TreeSet\n1, 3, 5");
//! ```

mod algebra;

use crate::comparator::{
    Comparator, IntComparator, NaturalOrder, StringComparator, int_comparator,
    owned_string_comparator,
};
use crate::container::{Container, Set};
use crate::error::SortedInputError;
use crate::persistent::{PersistentTreeMap, PersistentTreeMapIterator, ReferenceCounter};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

// =============================================================================
// TreeSet Definition
// =============================================================================

/// An ordered set of unique elements backed by a persistent Red-Black Tree.
///
/// The comparator `C` is fixed at construction and shared by every clone and
/// every set derived through the set-algebra operations.
///
/// # Combining sets
///
/// Both operands of [`union`](Self::union), [`difference`](Self::difference)
/// and [`intersection`](Self::intersection) have the same comparator type,
/// but two instances of that type may still disagree (for instance two
/// closures capturing different state). The merge algorithms assume both
/// sets are ascending under one shared order; combining sets whose
/// comparators induce different orders gives an unspecified (but memory
/// safe) result. This is not checked.
///
/// # Concurrency
///
/// There is no internal synchronization. Mutation requires `&mut self`;
/// without the `arc` feature the set is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use treeset::TreeSet;
///
/// let mut set = TreeSet::with_comparator(|left: &i32, right: &i32| right.cmp(left));
/// set.add_all([1, 2, 3]);
/// assert_eq!(set.values(), vec![3, 2, 1]);
///
/// assert!(set.remove(&2));
/// assert!(!set.remove(&2));
/// assert_eq!(set.values(), vec![3, 1]);
/// ```
pub struct TreeSet<T, C = NaturalOrder> {
    elements: PersistentTreeMap<T, (), C>,
}

impl<T> TreeSet<T, NaturalOrder> {
    /// Creates an empty set ordered by the elements' [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let set: TreeSet<u8> = TreeSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl TreeSet<i64, IntComparator> {
    /// Creates an empty set of `i64` in ascending order.
    #[inline]
    #[must_use]
    pub fn with_int_comparator() -> Self {
        Self::with_comparator(int_comparator)
    }
}

impl TreeSet<String, StringComparator> {
    /// Creates an empty set of `String` in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let mut set = TreeSet::with_string_comparator();
    /// set.add_all(["pear".to_string(), "apple".to_string()]);
    /// assert_eq!(set.values(), vec!["apple".to_string(), "pear".to_string()]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_string_comparator() -> Self {
        Self::with_comparator(owned_string_comparator)
    }
}

impl<T, C> TreeSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            elements: PersistentTreeMap::with_comparator(comparator),
        }
    }

    /// Creates an empty set sharing an existing comparator.
    #[inline]
    pub(crate) const fn with_shared_comparator(comparator: ReferenceCounter<C>) -> Self {
        Self {
            elements: PersistentTreeMap::with_shared_comparator(comparator),
        }
    }

    /// Creates an empty set with the same comparator as this one.
    #[inline]
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_shared_comparator(ReferenceCounter::clone(
            self.elements.shared_comparator(),
        ))
    }

    /// Returns the comparator ordering this set.
    #[inline]
    pub fn comparator(&self) -> &C {
        self.elements.comparator()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element. The comparator is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let mut set: TreeSet<i32> = (1..=3).collect();
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.elements = self.elements.cleared();
    }

    /// Returns an iterator over the elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> TreeSetIterator<'_, T> {
        TreeSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns the smallest element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.min().map(|(value, _)| value)
    }

    /// Returns the largest element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.max().map(|(value, _)| value)
    }
}

impl<T: Clone, C: Comparator<T>> TreeSet<T, C> {
    /// Builds a set from elements that are already strictly ascending under
    /// `comparator`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedInputError::Duplicate`] if an element is equivalent to
    /// its predecessor and [`SortedInputError::OutOfOrder`] if it orders before
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    /// use treeset::comparator::NaturalOrder;
    /// use treeset::error::SortedInputError;
    ///
    /// let set = TreeSet::try_from_sorted(NaturalOrder, [1, 2, 5]).unwrap();
    /// assert_eq!(set.values(), vec![1, 2, 5]);
    ///
    /// let duplicate = TreeSet::try_from_sorted(NaturalOrder, [1, 2, 2]);
    /// assert_eq!(duplicate.unwrap_err(), SortedInputError::Duplicate { index: 2 });
    /// ```
    pub fn try_from_sorted<I>(comparator: C, items: I) -> Result<Self, SortedInputError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_comparator(comparator);
        for (index, item) in items.into_iter().enumerate() {
            match set.last().map(|last| set.comparator().compare(last, &item)) {
                Some(Ordering::Equal) => return Err(SortedInputError::Duplicate { index }),
                Some(Ordering::Greater) => return Err(SortedInputError::OutOfOrder { index }),
                Some(Ordering::Less) | None => set.elements = set.elements.insert(item, ()),
            }
        }
        Ok(set)
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if the value was not present. Adding a value equivalent
    /// to a present element leaves the set unchanged.
    pub fn insert(&mut self, value: T) -> bool {
        if self.elements.contains_key(&value) {
            return false;
        }
        self.elements = self.elements.insert(value, ());
        true
    }

    /// Adds every item to the set.
    pub fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if the value was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let remaining = self.elements.remove(value);
        if remaining.len() == self.len() {
            return false;
        }
        self.elements = remaining;
        true
    }

    /// Removes every item from the set. Absent items are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let mut set: TreeSet<i32> = (1..=5).collect();
    /// set.remove_all([2, 4, 9]);
    /// assert_eq!(set.values(), vec![1, 3, 5]);
    /// ```
    pub fn remove_all<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for item in items {
            self.remove(item.borrow());
        }
    }

    /// Returns `true` if `value` is present.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains_key(value)
    }

    /// Returns `true` if every item is present.
    ///
    /// With no items this is vacuously `true`, even for an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let set: TreeSet<i32> = TreeSet::new();
    /// assert!(set.contains_all(Vec::<i32>::new()));
    /// assert!(!set.contains_all([1]));
    /// ```
    pub fn contains_all<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        items.into_iter().all(|item| self.contains(item.borrow()))
    }

    /// Returns every element in ascending order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a new set, with the same comparator, holding the elements for
    /// which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let set: TreeSet<i32> = (1..=6).collect();
    /// let even = set.select(|value| value % 2 == 0);
    /// assert_eq!(even.values(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn select<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut selected = self.empty_like();
        for value in self.iter().filter(|value| predicate(value)) {
            selected.elements = selected.elements.insert(value.clone(), ());
        }
        selected
    }

    /// Checks the backing tree's invariants.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        self.elements.assert_invariants();
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`TreeSet`] in ascending order.
pub struct TreeSetIterator<'a, T> {
    inner: PersistentTreeMapIterator<'a, T, ()>,
}

impl<'a, T> Iterator for TreeSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(value, _)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for TreeSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(value, _)| value)
    }
}

impl<T> ExactSizeIterator for TreeSetIterator<'_, T> {}

/// An owning iterator over the elements of a [`TreeSet`] in ascending order.
pub struct TreeSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for TreeSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for TreeSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for TreeSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Clones share the comparator and, until either side is mutated, the tree
/// nodes; the two sets are nonetheless fully independent.
impl<T, C> Clone for TreeSet<T, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T, C: Default> Default for TreeSet<T, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Comparator<T> + Default> FromIterator<T> for TreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.add_all(iter);
        set
    }
}

impl<T: Clone, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = TreeSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, C> IntoIterator for TreeSet<T, C> {
    type Item = T;
    type IntoIter = TreeSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let values: Vec<T> = self.iter().cloned().collect();
        TreeSetIntoIterator {
            inner: values.into_iter(),
        }
    }
}

/// Two sets are equal when they hold equivalent elements in the same order
/// under the receiver's comparator.
impl<T, C: Comparator<T>> PartialEq for TreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| self.comparator().equivalent(left, right))
    }
}

impl<T, C: Comparator<T>> Eq for TreeSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for TreeSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the header line `TreeSet` followed by the elements in ascending
/// order, separated by `", "`.
impl<T: fmt::Display, C> fmt::Display for TreeSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "TreeSet")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Container / Set Implementations
// =============================================================================

impl<T: Clone, C: Comparator<T>> Container<T> for TreeSet<T, C> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn values(&self) -> Vec<T> {
        Self::values(self)
    }
}

impl<T: Clone, C: Comparator<T>> Set<T> for TreeSet<T, C> {
    #[inline]
    fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        Self::add_all(self, items);
    }

    #[inline]
    fn remove_all<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Self::remove_all(self, items);
    }

    #[inline]
    fn contains_all<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Self::contains_all(self, items)
    }
}

static_assertions::assert_impl_all!(
    TreeSet<i64>: Set<i64>, Container<i64>, Clone, Default, Eq, fmt::Debug, fmt::Display
);
static_assertions::assert_impl_all!(
    TreeSet<i64, IntComparator>: Set<i64>, Container<i64>, Clone, Eq
);
static_assertions::assert_impl_all!(TreeSet<String, StringComparator>: Set<String>);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(TreeSet<i64>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(TreeSet<i64>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Reversed;
    use rstest::rstest;

    fn int_set(values: &[i64]) -> TreeSet<i64, IntComparator> {
        let mut set = TreeSet::with_int_comparator();
        set.add_all(values.iter().copied());
        set
    }

    #[rstest]
    fn test_new_creates_empty() {
        let set: TreeSet<i32> = TreeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
    }

    #[rstest]
    fn test_insert_reports_novelty() {
        let mut set = TreeSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_add_all_is_idempotent() {
        let mut set = int_set(&[3, 1, 2]);
        set.add_all([1, 2, 3, 3]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.values(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let mut set = int_set(&[1, 2]);
        assert!(!set.remove(&5));
        set.remove_all([7, 8]);
        assert_eq!(set.values(), vec![1, 2]);
    }

    #[rstest]
    fn test_remove_walks_the_tree_twice() {
        let comparisons = std::rc::Rc::new(std::cell::Cell::new(0_usize));
        let counter = std::rc::Rc::clone(&comparisons);
        let mut set = TreeSet::with_comparator(move |left: &i32, right: &i32| {
            counter.set(counter.get() + 1);
            left.cmp(right)
        });
        set.insert(5);

        comparisons.set(0);
        assert!(set.remove(&5));
        assert_eq!(comparisons.get(), 2);
        assert!(set.is_empty());

        comparisons.set(0);
        assert!(!set.remove(&5));
        assert_eq!(comparisons.get(), 0);
    }

    #[rstest]
    fn test_remove_reports_presence_and_keeps_invariants() {
        let mut set = int_set(&(0..64).collect::<Vec<_>>());
        for value in (0..64).step_by(3) {
            assert!(set.remove(&value));
            assert!(!set.remove(&value));
            set.assert_invariants();
        }
        assert_eq!(set.len(), 64 - 22);
        assert!(!set.remove(&100));
    }

    #[rstest]
    fn test_remove_all_accepts_references() {
        let mut set = int_set(&[1, 2, 3, 4]);
        let doomed = vec![2, 4];
        set.remove_all(&doomed);
        assert_eq!(set.values(), vec![1, 3]);
    }

    #[rstest]
    #[case::empty_set(&[], true)]
    #[case::non_empty_set(&[1, 2, 3], true)]
    fn test_contains_all_with_no_items_is_true(#[case] values: &[i64], #[case] expected: bool) {
        let set = int_set(values);
        assert_eq!(set.contains_all(Vec::<i64>::new()), expected);
    }

    #[rstest]
    #[case(vec![1, 3], true)]
    #[case(vec![1, 4], false)]
    #[case(vec![4], false)]
    fn test_contains_all(#[case] items: Vec<i64>, #[case] expected: bool) {
        let set = int_set(&[1, 2, 3]);
        assert_eq!(set.contains_all(items), expected);
    }

    #[rstest]
    fn test_clear_keeps_comparator() {
        let mut set = TreeSet::with_comparator(Reversed(NaturalOrder));
        set.add_all([1, 2, 3]);
        set.clear();
        assert!(set.is_empty());
        set.add_all([1, 2, 3]);
        assert_eq!(set.values(), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_first_and_last() {
        let set = int_set(&[5, -2, 9, 0]);
        assert_eq!(set.first(), Some(&-2));
        assert_eq!(set.last(), Some(&9));
    }

    #[rstest]
    fn test_clone_is_independent() {
        let mut original = int_set(&[1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy.values(), original.values());

        copy.insert(4);
        original.remove(&1);

        assert_eq!(original.values(), vec![2, 3]);
        assert_eq!(copy.values(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_clone_shares_comparator() {
        let set: TreeSet<i32, _> = TreeSet::with_comparator(Reversed(NaturalOrder));
        let copy = set.clone();
        assert!(ReferenceCounter::ptr_eq(
            set.elements.shared_comparator(),
            copy.elements.shared_comparator()
        ));
    }

    #[rstest]
    fn test_string_comparator_set() {
        let mut set = TreeSet::with_string_comparator();
        set.add_all(["b", "c", "a", "b"].map(String::from));
        assert_eq!(set.values(), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_select_keeps_comparator() {
        let mut set = TreeSet::with_comparator(Reversed(NaturalOrder));
        set.add_all(1..=6);
        let mut odd = set.select(|value| value % 2 == 1);
        assert_eq!(odd.values(), vec![5, 3, 1]);
        odd.insert(4);
        assert_eq!(odd.values(), vec![5, 4, 3, 1]);
        assert_eq!(set.len(), 6);
    }

    #[rstest]
    fn test_try_from_sorted_accepts_ascending() {
        let set = TreeSet::try_from_sorted(NaturalOrder, vec![1, 4, 9]);
        assert_eq!(set.map(|set| set.values()), Ok(vec![1, 4, 9]));
    }

    #[rstest]
    fn test_try_from_sorted_accepts_empty() {
        let set = TreeSet::try_from_sorted(NaturalOrder, Vec::<i32>::new());
        assert!(set.is_ok_and(|set| set.is_empty()));
    }

    #[rstest]
    #[case(vec![1, 1], SortedInputError::Duplicate { index: 1 })]
    #[case(vec![1, 2, 0], SortedInputError::OutOfOrder { index: 2 })]
    fn test_try_from_sorted_rejects(#[case] input: Vec<i32>, #[case] expected: SortedInputError) {
        let result = TreeSet::try_from_sorted(NaturalOrder, input);
        assert_eq!(result.err(), Some(expected));
    }

    #[rstest]
    fn test_try_from_sorted_uses_comparator() {
        let result = TreeSet::try_from_sorted(Reversed(NaturalOrder), vec![3, 2, 1]);
        assert_eq!(result.map(|set| set.values()), Ok(vec![3, 2, 1]));
    }

    #[rstest]
    fn test_iterators() {
        let set = int_set(&[2, 1, 3]);
        assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(set.iter().len(), 3);
        let owned: Vec<i64> = set.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_equality_uses_comparator() {
        let case_insensitive =
            |left: &String, right: &String| left.to_lowercase().cmp(&right.to_lowercase());
        let mut left = TreeSet::with_comparator(case_insensitive);
        let mut right = TreeSet::with_comparator(case_insensitive);
        left.add_all(["Apple".to_string(), "pear".to_string()]);
        right.add_all(["apple".to_string(), "PEAR".to_string()]);
        assert!(left == right);

        right.insert("plum".to_string());
        assert!(left != right);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(int_set(&[]).to_string(), "TreeSet\n");
        assert_eq!(int_set(&[7]).to_string(), "TreeSet\n7");
        assert_eq!(int_set(&[3, 1, 2]).to_string(), "TreeSet\n1, 2, 3");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", int_set(&[2, 1])), "{1, 2}");
    }

    #[rstest]
    fn test_generic_set_trait() {
        fn exercise<S: Set<i64>>(set: &mut S) -> Vec<i64> {
            set.add_all([4, 2, 2, 8]);
            set.remove_all([8]);
            assert!(set.contains_all([2, 4]));
            set.values()
        }

        let mut set = TreeSet::with_int_comparator();
        assert_eq!(exercise(&mut set), vec![2, 4]);
        Container::clear(&mut set);
        assert!(Container::is_empty(&set));
    }
}
