//! Abstract collection interfaces.
//!
//! [`Container`] is the capability shared by every collection in the crate;
//! [`Set`] adds membership operations over many items at once. Generic code
//! written against these traits works with any set implementation.
//!
//! # Examples
//!
//! ```rust
//! use treeset::TreeSet;
//! use treeset::container::{Container, Set};
//!
//! fn fill<S: Set<i32>>(set: &mut S) {
//!     set.add_all([3, 1, 2]);
//! }
//!
//! let mut set = TreeSet::new();
//! fill(&mut set);
//! assert_eq!(Container::values(&set), vec![1, 2, 3]);
//! ```

use std::borrow::Borrow;

/// A collection of elements of type `T`.
pub trait Container<T> {
    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns every element, in the container's iteration order.
    fn values(&self) -> Vec<T>;
}

/// A container of unique elements.
pub trait Set<T>: Container<T> {
    /// Adds every item. Items already present are left untouched.
    fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>;

    /// Removes every item that is present. Absent items are ignored.
    fn remove_all<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Returns `true` if every item is present.
    ///
    /// An empty `items` sequence is contained in every set.
    fn contains_all<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>;
}
