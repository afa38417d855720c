//! Persistent (immutable) tree map based on Red-Black Tree.
//!
//! This module provides [`PersistentTreeMap`], an immutable ordered map
//! that uses structural sharing for efficient operations and orders its keys
//! with an injected [`Comparator`].
//!
//! # Overview
//!
//! `PersistentTreeMap` is based on a persistent Red-Black Tree, a self-balancing
//! binary search tree that provides efficient ordered map operations.
//!
//! - O(log N) get
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) min/max
//! - O(N) ordered iteration
//! - O(1) len, `is_empty` and clone
//!
//! All operations return new maps without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Examples
//!
//! ```rust
//! use treeset::comparator::{NaturalOrder, Reversed};
//! use treeset::persistent::PersistentTreeMap;
//!
//! let map = PersistentTreeMap::with_comparator(Reversed(NaturalOrder))
//!     .insert(1, "one")
//!     .insert(3, "three")
//!     .insert(2, "two");
//!
//! // Entries are always in comparator order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&3, &2, &1]);
//! ```
//!
//! # Internal Structure
//!
//! The Red-Black Tree maintains the following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. All leaves (NIL) are black
//! 4. Red nodes have only black children
//! 5. Every path from root to leaf has the same number of black nodes
//!
//! Insertion rebalances with Okasaki's four-case `balance`; deletion follows
//! Kahrs' persistent formulation (`balance_left`, `balance_right`, `append`),
//! so both operations restore every invariant and the tree height stays
//! O(log N).

use super::ReferenceCounter;
use crate::comparator::{Comparator, NaturalOrder};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

/// A possibly empty subtree.
type Link<K, V> = Option<ReferenceCounter<Node<K, V>>>;

/// Internal node structure for the Red-Black Tree.
struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K: Clone, V: Clone> Node<K, V> {
    /// Creates a copy of this node with a new color.
    fn painted(&self, color: Color) -> Link<K, V> {
        linked(
            color,
            self.left.clone(),
            self.key.clone(),
            self.value.clone(),
            self.right.clone(),
        )
    }
}

/// Allocates a new node.
fn linked<K, V>(color: Color, left: Link<K, V>, key: K, value: V, right: Link<K, V>) -> Link<K, V> {
    Some(ReferenceCounter::new(Node {
        key,
        value,
        color,
        left,
        right,
    }))
}

fn red<K, V>(left: Link<K, V>, key: K, value: V, right: Link<K, V>) -> Link<K, V> {
    linked(Color::Red, left, key, value, right)
}

fn black<K, V>(left: Link<K, V>, key: K, value: V, right: Link<K, V>) -> Link<K, V> {
    linked(Color::Black, left, key, value, right)
}

/// Returns the node if the link points to a red node.
fn as_red<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    link.as_deref().filter(|node| node.color == Color::Red)
}

/// Returns the node if the link points to a black node (not a NIL leaf).
fn as_black<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    link.as_deref().filter(|node| node.color == Color::Black)
}

/// Paints a subtree root black.
fn blacken<K: Clone, V: Clone>(link: Link<K, V>) -> Link<K, V> {
    match as_red(&link) {
        Some(node) => node.painted(Color::Black),
        None => link,
    }
}

/// Paints a black subtree root red, lowering its black height by one.
fn redden<K: Clone, V: Clone>(link: &Link<K, V>) -> Link<K, V> {
    debug_assert!(
        as_black(link).is_some(),
        "redden requires a black node; red-black invariant violated"
    );
    match as_black(link) {
        Some(node) => node.painted(Color::Red),
        None => link.clone(),
    }
}

// =============================================================================
// Rebalancing
// =============================================================================

/// Rebuilds a node whose children may contain a red-red violation.
///
/// Every violating shape is rotated into a red node with two black children;
/// anything else becomes a black node.
fn balance<K: Clone, V: Clone>(left: Link<K, V>, key: K, value: V, right: Link<K, V>) -> Link<K, V> {
    if let Some(left_node) = as_red(&left)
        && let Some(right_node) = as_red(&right)
    {
        return red(
            left_node.painted(Color::Black),
            key,
            value,
            right_node.painted(Color::Black),
        );
    }

    if let Some(left_node) = as_red(&left) {
        if let Some(left_left) = as_red(&left_node.left) {
            return red(
                left_left.painted(Color::Black),
                left_node.key.clone(),
                left_node.value.clone(),
                black(left_node.right.clone(), key, value, right),
            );
        }
        if let Some(left_right) = as_red(&left_node.right) {
            return red(
                black(
                    left_node.left.clone(),
                    left_node.key.clone(),
                    left_node.value.clone(),
                    left_right.left.clone(),
                ),
                left_right.key.clone(),
                left_right.value.clone(),
                black(left_right.right.clone(), key, value, right),
            );
        }
    }

    if let Some(right_node) = as_red(&right) {
        if let Some(right_right) = as_red(&right_node.right) {
            return red(
                black(left, key, value, right_node.left.clone()),
                right_node.key.clone(),
                right_node.value.clone(),
                right_right.painted(Color::Black),
            );
        }
        if let Some(right_left) = as_red(&right_node.left) {
            return red(
                black(left, key, value, right_left.left.clone()),
                right_left.key.clone(),
                right_left.value.clone(),
                black(
                    right_left.right.clone(),
                    right_node.key.clone(),
                    right_node.value.clone(),
                    right_node.right.clone(),
                ),
            );
        }
    }

    black(left, key, value, right)
}

/// Rebuilds a node whose left subtree lost one unit of black height.
fn balance_left<K: Clone, V: Clone>(
    left: Link<K, V>,
    key: K,
    value: V,
    right: Link<K, V>,
) -> Link<K, V> {
    if let Some(left_node) = as_red(&left) {
        return red(left_node.painted(Color::Black), key, value, right);
    }
    if let Some(right_node) = as_black(&right) {
        return balance(left, key, value, right_node.painted(Color::Red));
    }
    if let Some(right_node) = as_red(&right)
        && let Some(right_left) = as_black(&right_node.left)
    {
        return red(
            black(left, key, value, right_left.left.clone()),
            right_left.key.clone(),
            right_left.value.clone(),
            balance(
                right_left.right.clone(),
                right_node.key.clone(),
                right_node.value.clone(),
                redden(&right_node.right),
            ),
        );
    }
    debug_assert!(false, "balance_left reached an unbalanced shape");
    black(left, key, value, right)
}

/// Rebuilds a node whose right subtree lost one unit of black height.
fn balance_right<K: Clone, V: Clone>(
    left: Link<K, V>,
    key: K,
    value: V,
    right: Link<K, V>,
) -> Link<K, V> {
    if let Some(right_node) = as_red(&right) {
        return red(left, key, value, right_node.painted(Color::Black));
    }
    if let Some(left_node) = as_black(&left) {
        return balance(left_node.painted(Color::Red), key, value, right);
    }
    if let Some(left_node) = as_red(&left)
        && let Some(left_right) = as_black(&left_node.right)
    {
        return red(
            balance(
                redden(&left_node.left),
                left_node.key.clone(),
                left_node.value.clone(),
                left_right.left.clone(),
            ),
            left_right.key.clone(),
            left_right.value.clone(),
            black(left_right.right.clone(), key, value, right),
        );
    }
    debug_assert!(false, "balance_right reached an unbalanced shape");
    black(left, key, value, right)
}

/// Joins the two children of a removed node into one subtree.
///
/// Every key of `left` must order before every key of `right`.
fn append<K: Clone, V: Clone>(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    let (left_node, right_node) = match (left, right) {
        (None, right) => return right,
        (left, None) => return left,
        (Some(left_node), Some(right_node)) => (left_node, right_node),
    };

    match (left_node.color, right_node.color) {
        (Color::Red, Color::Red) => {
            let middle = append(left_node.right.clone(), right_node.left.clone());
            if let Some(middle_node) = as_red(&middle) {
                return red(
                    red(
                        left_node.left.clone(),
                        left_node.key.clone(),
                        left_node.value.clone(),
                        middle_node.left.clone(),
                    ),
                    middle_node.key.clone(),
                    middle_node.value.clone(),
                    red(
                        middle_node.right.clone(),
                        right_node.key.clone(),
                        right_node.value.clone(),
                        right_node.right.clone(),
                    ),
                );
            }
            red(
                left_node.left.clone(),
                left_node.key.clone(),
                left_node.value.clone(),
                red(
                    middle,
                    right_node.key.clone(),
                    right_node.value.clone(),
                    right_node.right.clone(),
                ),
            )
        }
        (Color::Black, Color::Black) => {
            let middle = append(left_node.right.clone(), right_node.left.clone());
            if let Some(middle_node) = as_red(&middle) {
                return red(
                    black(
                        left_node.left.clone(),
                        left_node.key.clone(),
                        left_node.value.clone(),
                        middle_node.left.clone(),
                    ),
                    middle_node.key.clone(),
                    middle_node.value.clone(),
                    black(
                        middle_node.right.clone(),
                        right_node.key.clone(),
                        right_node.value.clone(),
                        right_node.right.clone(),
                    ),
                );
            }
            balance_left(
                left_node.left.clone(),
                left_node.key.clone(),
                left_node.value.clone(),
                black(
                    middle,
                    right_node.key.clone(),
                    right_node.value.clone(),
                    right_node.right.clone(),
                ),
            )
        }
        (_, Color::Red) => red(
            append(Some(left_node), right_node.left.clone()),
            right_node.key.clone(),
            right_node.value.clone(),
            right_node.right.clone(),
        ),
        (Color::Red, _) => red(
            left_node.left.clone(),
            left_node.key.clone(),
            left_node.value.clone(),
            append(left_node.right.clone(), Some(right_node)),
        ),
    }
}

// =============================================================================
// PersistentTreeMap Definition
// =============================================================================

/// A persistent (immutable) ordered map based on Red-Black Tree.
///
/// `PersistentTreeMap` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns.
///
/// Keys are ordered by the comparator `C` supplied at construction (the
/// natural [`Ord`] order by default). The comparator is shared, never
/// replaced, by every version derived from a map.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `contains_key` | O(log N)          |
/// | `min`/`max`    | O(log N)          |
/// | `iter`         | O(N)              |
/// | `len`          | O(1)              |
/// | `is_empty`     | O(1)              |
///
/// # Examples
///
/// ```rust
/// use treeset::persistent::PersistentTreeMap;
///
/// let map = PersistentTreeMap::new()
///     .insert(3, "three")
///     .insert(1, "one")
///     .insert(2, "two");
///
/// let keys: Vec<&i32> = map.keys().collect();
/// assert_eq!(keys, vec![&1, &2, &3]);
/// assert_eq!(map.get(&2), Some(&"two"));
/// ```
pub struct PersistentTreeMap<K, V, C = NaturalOrder> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of entries
    length: usize,
    /// Total order over the keys, shared between versions
    comparator: ReferenceCounter<C>,
}

impl<K, V, C> Clone for PersistentTreeMap<K, V, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }
}

impl<K, V> PersistentTreeMap<K, V, NaturalOrder> {
    /// Creates a new empty map ordered by the keys' [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let map: PersistentTreeMap<i32, String> = PersistentTreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> PersistentTreeMap<K, V, C> {
    /// Creates a new empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let map = PersistentTreeMap::with_comparator(|left: &i32, right: &i32| right.cmp(left))
    ///     .insert(1, ())
    ///     .insert(2, ());
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_shared_comparator(ReferenceCounter::new(comparator))
    }

    /// Creates a new empty map that shares an existing comparator.
    #[inline]
    pub(crate) const fn with_shared_comparator(comparator: ReferenceCounter<C>) -> Self {
        Self {
            root: None,
            length: 0,
            comparator,
        }
    }

    /// Returns an empty map with the same comparator.
    ///
    /// This is the persistent counterpart of clearing a map.
    #[inline]
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::with_shared_comparator(ReferenceCounter::clone(&self.comparator))
    }

    /// Returns the comparator ordering this map.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the shared handle to the comparator.
    #[inline]
    pub(crate) const fn shared_comparator(&self) -> &ReferenceCounter<C> {
        &self.comparator
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let empty: PersistentTreeMap<i32, String> = PersistentTreeMap::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.insert(1, "one".to_string());
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the maximum key.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let map = PersistentTreeMap::new()
    ///     .insert(3, "three")
    ///     .insert(1, "one")
    ///     .insert(2, "two");
    ///
    /// let entries: Vec<(&i32, &&str)> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &"one"), (&2, &"two"), (&3, &"three")]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentTreeMapIterator<'_, K, V> {
        let mut entries = Vec::with_capacity(self.length);
        Self::collect_entries_in_order(self.root.as_deref(), &mut entries);
        PersistentTreeMapIterator {
            back_index: entries.len(),
            entries,
            front_index: 0,
        }
    }

    /// Collects all entries in sorted order (in-order traversal).
    fn collect_entries_in_order<'a>(node: Option<&'a Node<K, V>>, entries: &mut Vec<(&'a K, &'a V)>) {
        if let Some(node_ref) = node {
            Self::collect_entries_in_order(node_ref.left.as_deref(), entries);
            entries.push((&node_ref.key, &node_ref.value));
            Self::collect_entries_in_order(node_ref.right.as_deref(), entries);
        }
    }

    /// Returns an iterator over keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let map = PersistentTreeMap::new()
    ///     .insert(3, "three")
    ///     .insert(1, "one")
    ///     .insert(2, "two");
    ///
    /// let keys: Vec<&i32> = map.keys().collect();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V, C: Comparator<K>> PersistentTreeMap<K, V, C> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let map = PersistentTreeMap::new().insert("hello".to_string(), 42);
    ///
    /// assert_eq!(map.get(&"hello".to_string()), Some(&42));
    /// assert_eq!(map.get(&"world".to_string()), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>> PersistentTreeMap<K, V, C> {
    /// Creates a map containing a single key-value pair.
    #[inline]
    #[must_use]
    pub fn singleton_with(comparator: C, key: K, value: V) -> Self {
        Self::with_comparator(comparator).insert(key, value)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contains an equivalent key, the stored key and value
    /// are replaced.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let map1 = PersistentTreeMap::new().insert(1, "one");
    /// let map2 = map1.insert(1, "ONE");
    ///
    /// assert_eq!(map1.get(&1), Some(&"one")); // Original unchanged
    /// assert_eq!(map2.get(&1), Some(&"ONE")); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let (new_root, added) =
            Self::insert_into_node(self.root.as_ref(), key, value, &*self.comparator);

        Self {
            root: blacken(new_root),
            length: if added { self.length + 1 } else { self.length },
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Recursive helper for insert.
    /// Returns (`new_node`, `was_added`) where `was_added` is true if a new entry was added.
    fn insert_into_node(
        node: Option<&ReferenceCounter<Node<K, V>>>,
        key: K,
        value: V,
        comparator: &C,
    ) -> (Link<K, V>, bool) {
        let Some(node_ref) = node else {
            return (red(None, key, value, None), true);
        };

        // Red nodes never rebalance locally; a red-red pair is resolved by
        // the black grandparent.
        let rebuild: fn(Link<K, V>, K, V, Link<K, V>) -> Link<K, V> = if node_ref.color == Color::Red {
            red
        } else {
            balance
        };

        match comparator.compare(&key, &node_ref.key) {
            Ordering::Less => {
                let (new_left, added) =
                    Self::insert_into_node(node_ref.left.as_ref(), key, value, comparator);
                let rebuilt = rebuild(
                    new_left,
                    node_ref.key.clone(),
                    node_ref.value.clone(),
                    node_ref.right.clone(),
                );
                (rebuilt, added)
            }
            Ordering::Greater => {
                let (new_right, added) =
                    Self::insert_into_node(node_ref.right.as_ref(), key, value, comparator);
                let rebuilt = rebuild(
                    node_ref.left.clone(),
                    node_ref.key.clone(),
                    node_ref.value.clone(),
                    new_right,
                );
                (rebuilt, added)
            }
            Ordering::Equal => {
                let replaced = linked(
                    node_ref.color,
                    node_ref.left.clone(),
                    key,
                    value,
                    node_ref.right.clone(),
                );
                (replaced, false)
            }
        }
    }

    /// Removes a key from the map.
    ///
    /// Returns a new map without the key. If the key doesn't exist,
    /// returns a clone of the original map.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treeset::persistent::PersistentTreeMap;
    ///
    /// let map = PersistentTreeMap::new()
    ///     .insert(1, "one")
    ///     .insert(2, "two");
    /// let removed = map.remove(&1);
    ///
    /// assert_eq!(map.len(), 2);     // Original unchanged
    /// assert_eq!(removed.len(), 1); // New version
    /// assert_eq!(removed.get(&1), None);
    /// ```
    #[must_use]
    pub fn remove(&self, key: &K) -> Self {
        // Deletion rebalancing assumes the key is present on the search path.
        if !self.contains_key(key) {
            return self.clone();
        }

        let new_root = Self::remove_from_node(self.root.as_ref(), key, &*self.comparator);

        Self {
            root: blacken(new_root),
            length: self.length.saturating_sub(1),
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Recursive helper for remove.
    fn remove_from_node(
        node: Option<&ReferenceCounter<Node<K, V>>>,
        key: &K,
        comparator: &C,
    ) -> Link<K, V> {
        let node_ref = node?;
        match comparator.compare(key, &node_ref.key) {
            Ordering::Less => {
                let new_left = Self::remove_from_node(node_ref.left.as_ref(), key, comparator);
                if as_black(&node_ref.left).is_some() {
                    balance_left(
                        new_left,
                        node_ref.key.clone(),
                        node_ref.value.clone(),
                        node_ref.right.clone(),
                    )
                } else {
                    red(
                        new_left,
                        node_ref.key.clone(),
                        node_ref.value.clone(),
                        node_ref.right.clone(),
                    )
                }
            }
            Ordering::Greater => {
                let new_right = Self::remove_from_node(node_ref.right.as_ref(), key, comparator);
                if as_black(&node_ref.right).is_some() {
                    balance_right(
                        node_ref.left.clone(),
                        node_ref.key.clone(),
                        node_ref.value.clone(),
                        new_right,
                    )
                } else {
                    red(
                        node_ref.left.clone(),
                        node_ref.key.clone(),
                        node_ref.value.clone(),
                        new_right,
                    )
                }
            }
            Ordering::Equal => append(node_ref.left.clone(), node_ref.right.clone()),
        }
    }

    /// Checks every Red-Black and ordering invariant, returning the black height.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) -> usize {
        assert!(
            as_red(&self.root).is_none(),
            "root of a red-black tree must be black"
        );
        let mut count = 0;
        let height = Self::assert_subtree(self.root.as_deref(), &*self.comparator, &mut count);
        assert_eq!(count, self.length, "length must match the number of nodes");
        let keys: Vec<&K> = self.keys().collect();
        assert!(
            keys.windows(2)
                .all(|pair| self.comparator.compare(pair[0], pair[1]) == Ordering::Less),
            "keys must be strictly ascending"
        );
        height
    }

    #[cfg(test)]
    fn assert_subtree(node: Option<&Node<K, V>>, comparator: &C, count: &mut usize) -> usize {
        let Some(node_ref) = node else {
            return 1;
        };
        *count += 1;
        if node_ref.color == Color::Red {
            assert!(
                as_red(&node_ref.left).is_none() && as_red(&node_ref.right).is_none(),
                "red node must not have a red child"
            );
        }
        if let Some(left) = node_ref.left.as_deref() {
            assert_eq!(comparator.compare(&left.key, &node_ref.key), Ordering::Less);
        }
        if let Some(right) = node_ref.right.as_deref() {
            assert_eq!(comparator.compare(&right.key, &node_ref.key), Ordering::Greater);
        }
        let left_height = Self::assert_subtree(node_ref.left.as_deref(), comparator, count);
        let right_height = Self::assert_subtree(node_ref.right.as_deref(), comparator, count);
        assert_eq!(left_height, right_height, "black heights must match");
        left_height + usize::from(node_ref.color == Color::Black)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over key-value pairs of a [`PersistentTreeMap`].
pub struct PersistentTreeMapIterator<'a, K, V> {
    entries: Vec<(&'a K, &'a V)>,
    front_index: usize,
    back_index: usize,
}

impl<'a, K, V> Iterator for PersistentTreeMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front_index >= self.back_index {
            None
        } else {
            let entry = self.entries[self.front_index];
            self.front_index += 1;
            Some(entry)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back_index.saturating_sub(self.front_index);
        (remaining, Some(remaining))
    }
}

impl<K, V> DoubleEndedIterator for PersistentTreeMapIterator<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front_index >= self.back_index {
            None
        } else {
            self.back_index -= 1;
            Some(self.entries[self.back_index])
        }
    }
}

impl<K, V> ExactSizeIterator for PersistentTreeMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.back_index.saturating_sub(self.front_index)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for PersistentTreeMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Comparator<K> + Default> FromIterator<(K, V)>
    for PersistentTreeMap<K, V, C>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (key, value) in iter {
            map = map.insert(key, value);
        }
        map
    }
}

impl<'a, K, V, C> IntoIterator for &'a PersistentTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = PersistentTreeMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for PersistentTreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for PersistentTreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
