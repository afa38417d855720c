//! # treeset
//!
//! An ordered set with a pluggable comparator, backed by a persistent
//! Red-Black Tree.
//!
//! ## Overview
//!
//! - **[`TreeSet`]**: unique elements kept in comparator order, with bulk
//!   membership operations and merge-based set algebra
//! - **Comparators**: any `Fn(&T, &T) -> Ordering`, plus [`NaturalOrder`],
//!   [`Reversed`], key extraction and presets for primitive types
//! - **Persistent storage**: [`PersistentTreeMap`], the structurally shared
//!   tree the set is built on, usable on its own
//!
//! ## Feature Flags
//!
//! - `arc`: share tree nodes through `Arc` instead of `Rc`, making sets
//!   `Send + Sync` when their elements and comparator are
//! - `tracing`: emit a `TRACE` event for every set-algebra operation
//!
//! ## Example
//!
//! ```rust
//! use treeset::prelude::*;
//!
//! let mut evens = TreeSet::with_int_comparator();
//! evens.add_all([0, 2, 4, 6, 8]);
//! let mut thirds = TreeSet::with_int_comparator();
//! thirds.add_all([0, 3, 6, 9]);
//!
//! assert_eq!(evens.intersection(&thirds).values(), vec![0, 6]);
//! assert_eq!(evens.difference(&thirds).values(), vec![2, 4, 8]);
//! assert_eq!(evens.union(&thirds).len(), 7);
//! ```
//!
//! [`NaturalOrder`]: comparator::NaturalOrder
//! [`Reversed`]: comparator::Reversed
//! [`PersistentTreeMap`]: persistent::PersistentTreeMap

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `TRACE` event describing a set operation when the `tracing`
/// feature is enabled.
macro_rules! trace_operation {
    ($($field:ident = $value:expr),+ $(,)?) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "treeset", $($field = $value),+, "set operation");
        }
        #[cfg(not(feature = "tracing"))]
        {
            $(let _ = &$value;)+
        }
    }};
}

pub(crate) use trace_operation;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use treeset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::{
        ByKey, Comparator, NaturalOrder, Reversed, comparing, int_comparator, string_comparator,
    };
    pub use crate::container::{Container, Set};
    pub use crate::error::SortedInputError;
    pub use crate::persistent::PersistentTreeMap;
    pub use crate::set::TreeSet;
}

pub mod comparator;
pub mod container;
pub mod error;
pub mod persistent;
pub mod set;

pub use set::TreeSet;
