//! Union, difference and intersection for [`TreeSet`].
//!
//! The intersections walk both operands in ascending order with two cursors,
//! so they never perform a membership lookup. Union and difference feed the
//! other operand through the ordinary insert and remove paths.

use super::TreeSet;
use crate::comparator::Comparator;
use std::cmp::Ordering;

impl<T: Clone, C: Comparator<T>> TreeSet<T, C> {
    // =========================================================================
    // Union
    // =========================================================================

    /// Returns a new set holding every element of `self` or `other`.
    ///
    /// The result uses `self`'s comparator; neither operand is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let left: TreeSet<i32> = [1, 3, 5, 7].into_iter().collect();
    /// let right: TreeSet<i32> = [3, 4, 5, 6].into_iter().collect();
    /// assert_eq!(left.union(&right).values(), vec![1, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.in_place_union(other);
        result
    }

    /// Adds every element of `other` to `self`.
    pub fn in_place_union(&mut self, other: &Self) {
        let before = self.len();
        self.add_all(other.iter().cloned());
        crate::trace_operation!(
            operation = "in_place_union",
            left = before,
            right = other.len(),
            result = self.len()
        );
    }

    // =========================================================================
    // Difference
    // =========================================================================

    /// Returns a new set holding the elements of `self` that are not in
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let left: TreeSet<i32> = [1, 3, 5, 7].into_iter().collect();
    /// let right: TreeSet<i32> = [3, 4, 5, 6].into_iter().collect();
    /// assert_eq!(left.difference(&right).values(), vec![1, 7]);
    /// assert_eq!(right.difference(&left).values(), vec![4, 6]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.in_place_difference(other);
        result
    }

    /// Removes from `self` every element of `other`.
    pub fn in_place_difference(&mut self, other: &Self) {
        let before = self.len();
        self.remove_all(other.iter());
        crate::trace_operation!(
            operation = "in_place_difference",
            left = before,
            right = other.len(),
            result = self.len()
        );
    }

    // =========================================================================
    // Intersection
    // =========================================================================

    /// Returns a new set holding the elements present in both `self` and
    /// `other`.
    ///
    /// Both operands are read once in ascending order; the result shares
    /// `self`'s comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let left: TreeSet<i32> = [1, 3, 5, 7].into_iter().collect();
    /// let right: TreeSet<i32> = [3, 4, 5, 6].into_iter().collect();
    /// assert_eq!(left.intersection(&right).values(), vec![3, 5]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.empty_like();
        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();

        while let (Some(&a), Some(&b)) = (left.peek(), right.peek()) {
            match self.comparator().compare(a, b) {
                Ordering::Less => {
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    result.elements = result.elements.insert(a.clone(), ());
                    left.next();
                    right.next();
                }
            }
        }

        crate::trace_operation!(
            operation = "intersection",
            left = self.len(),
            right = other.len(),
            result = result.len()
        );
        result
    }

    /// Keeps only the elements of `self` that are also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::TreeSet;
    ///
    /// let mut left: TreeSet<i32> = [1, 3, 5, 7].into_iter().collect();
    /// let right: TreeSet<i32> = [3, 4, 5, 6].into_iter().collect();
    /// left.in_place_intersection(&right);
    /// assert_eq!(left.values(), vec![3, 5]);
    /// ```
    pub fn in_place_intersection(&mut self, other: &Self) {
        let before = self.len();
        // Structural sharing makes the snapshot O(1); removals below replace
        // `self.elements` without disturbing it.
        let snapshot = self.elements.clone();
        let mut left = snapshot.keys().peekable();
        let mut right = other.iter().peekable();

        while let Some(&a) = left.peek() {
            let Some(&b) = right.peek() else {
                break;
            };
            match snapshot.comparator().compare(a, b) {
                Ordering::Less => {
                    self.elements = self.elements.remove(a);
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    left.next();
                    right.next();
                }
            }
        }
        for a in left {
            self.elements = self.elements.remove(a);
        }

        crate::trace_operation!(
            operation = "in_place_intersection",
            left = before,
            right = other.len(),
            result = self.len()
        );
    }
}
