//! Property-based tests for `PersistentTreeMap`.
//!
//! Every map is checked against `BTreeMap` as a model, under both the natural
//! order and a reversed comparator.

use proptest::prelude::*;
use std::collections::BTreeMap;
use treeset::comparator::{NaturalOrder, Reversed};
use treeset::persistent::PersistentTreeMap;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

fn arbitrary_entries(max_size: usize) -> impl Strategy<Value = Vec<(i16, i32)>> {
    prop::collection::vec((any::<i16>(), any::<i32>()), 0..max_size)
}

fn model_of(entries: &[(i16, i32)]) -> BTreeMap<i16, i32> {
    entries.iter().copied().collect()
}

// =============================================================================
// Get-Insert Laws
// =============================================================================

proptest! {
    /// Law: get after insert returns the inserted value.
    #[test]
    fn prop_get_insert_law(entries in arbitrary_entries(40), key: i16, value: i32) {
        let map: PersistentTreeMap<i16, i32> = entries.into_iter().collect();
        let updated = map.insert(key, value);
        prop_assert_eq!(updated.get(&key), Some(&value));
    }

    /// Law: insert does not affect other keys.
    #[test]
    fn prop_get_insert_other_law(
        entries in arbitrary_entries(40),
        key1: i16,
        key2: i16,
        value: i32
    ) {
        prop_assume!(key1 != key2);
        let map: PersistentTreeMap<i16, i32> = entries.into_iter().collect();
        let updated = map.insert(key1, value);
        prop_assert_eq!(updated.get(&key2), map.get(&key2));
    }

    /// Law: insert never changes the map it was called on.
    #[test]
    fn prop_insert_preserves_original(entries in arbitrary_entries(40), key: i16, value: i32) {
        let map: PersistentTreeMap<i16, i32> = entries.iter().copied().collect();
        let before: Vec<(i16, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let _updated = map.insert(key, value);
        let after: Vec<(i16, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(before, after);
    }
}

// =============================================================================
// Remove Laws
// =============================================================================

proptest! {
    /// Law: get after remove returns None.
    #[test]
    fn prop_get_remove_law(entries in arbitrary_entries(40), key: i16) {
        let map: PersistentTreeMap<i16, i32> = entries.into_iter().collect();
        let removed = map.remove(&key);
        prop_assert_eq!(removed.get(&key), None);
    }

    /// Law: remove does not affect other keys.
    #[test]
    fn prop_get_remove_other_law(entries in arbitrary_entries(40), key1: i16, key2: i16) {
        prop_assume!(key1 != key2);
        let map: PersistentTreeMap<i16, i32> = entries.into_iter().collect();
        let removed = map.remove(&key1);
        prop_assert_eq!(removed.get(&key2), map.get(&key2));
    }

    /// Law: removing every key leaves an empty map.
    #[test]
    fn prop_remove_everything(entries in arbitrary_entries(60)) {
        let mut map: PersistentTreeMap<i16, i32> = entries.iter().copied().collect();
        for (key, _) in &entries {
            map = map.remove(key);
        }
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.iter().count(), 0);
    }
}

// =============================================================================
// Model Laws
// =============================================================================

proptest! {
    /// Law: iteration matches the `BTreeMap` model after inserts.
    #[test]
    fn prop_matches_model_after_inserts(entries in arbitrary_entries(80)) {
        let map: PersistentTreeMap<i16, i32> = entries.iter().copied().collect();
        let model = model_of(&entries);

        prop_assert_eq!(map.len(), model.len());
        let actual: Vec<(i16, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(i16, i32)> = model.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Law: interleaved inserts and removes match the model.
    #[test]
    fn prop_matches_model_after_mixed_operations(
        operations in prop::collection::vec((any::<bool>(), any::<u8>(), any::<i32>()), 0..200)
    ) {
        let mut map = PersistentTreeMap::new();
        let mut model = BTreeMap::new();
        for (is_insert, key, value) in operations {
            if is_insert {
                map = map.insert(key, value);
                model.insert(key, value);
            } else {
                map = map.remove(&key);
                model.remove(&key);
            }
        }

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.min().map(|(k, v)| (*k, *v)), model.first_key_value().map(|(k, v)| (*k, *v)));
        prop_assert_eq!(map.max().map(|(k, v)| (*k, *v)), model.last_key_value().map(|(k, v)| (*k, *v)));
        let keys: Vec<u8> = map.keys().copied().collect();
        let expected: Vec<u8> = model.keys().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    /// Law: a reversed comparator iterates the model backwards.
    #[test]
    fn prop_reversed_comparator_iterates_backwards(entries in arbitrary_entries(60)) {
        let mut map = PersistentTreeMap::with_comparator(Reversed(NaturalOrder));
        for (key, value) in &entries {
            map = map.insert(*key, *value);
        }
        let keys: Vec<i16> = map.keys().copied().collect();
        let expected: Vec<i16> = model_of(&entries).keys().rev().copied().collect();
        prop_assert_eq!(keys, expected);
    }

    /// Law: reverse iteration is the forward iteration reversed.
    #[test]
    fn prop_double_ended_iteration(entries in arbitrary_entries(60)) {
        let map: PersistentTreeMap<i16, i32> = entries.into_iter().collect();
        let mut forward: Vec<i16> = map.keys().copied().collect();
        let backward: Vec<i16> = map.keys().rev().copied().collect();
        forward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
