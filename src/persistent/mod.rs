//! Persistent (immutable) data structures.
//!
//! This module provides the storage layer of the crate:
//!
//! - [`PersistentTreeMap`]: Persistent ordered map (Red-Black Tree) whose
//!   order is defined by an injected [`Comparator`](crate::comparator::Comparator)
//!
//! # Structural Sharing
//!
//! Updates create new versions of the map that share every untouched node
//! with the previous version, so cloning a map is O(1) and an update copies
//! only the O(log N) nodes on the path to the changed key.
//!
//! # Examples
//!
//! ```rust
//! use treeset::persistent::PersistentTreeMap;
//!
//! let map = PersistentTreeMap::new()
//!     .insert("one".to_string(), 1)
//!     .insert("two".to_string(), 2);
//! assert_eq!(map.get(&"one".to_string()), Some(&1));
//!
//! // Structural sharing: the original map is preserved
//! let updated = map.insert("one".to_string(), 100);
//! assert_eq!(map.get(&"one".to_string()), Some(&1));
//! assert_eq!(updated.get(&"one".to_string()), Some(&100));
//! ```

/// Reference counter type used for structural sharing.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod treemap;

pub use treemap::PersistentTreeMap;
pub use treemap::PersistentTreeMapIterator;
