//! Generic in-memory key → record map.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::hash::Hash;

use parking_lot::RwLock;

use crate::domain::repositories::StoreError;

/// Thread-safe map that owns every record it holds.
///
/// Writers take an exclusive lock for the whole "pick key + insert" step, so
/// two concurrent creates can never compute the same key or clobber each
/// other. Readers share the lock and receive clones; no caller ever holds a
/// reference into the map.
pub struct KeyedStore<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> KeyedStore<K, V>
where
    K: Eq + Hash + Display,
    V: Clone,
{
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a record under `key` if the key is free.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyCollision`] if `key` is already present.
    pub fn insert(&self, key: K, value: V) -> Result<(), StoreError> {
        let mut entries = self.entries.write();

        match entries.entry(key) {
            Entry::Occupied(slot) => Err(StoreError::KeyCollision {
                key: slot.key().to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Computes a key from the current size and inserts the record it builds.
    ///
    /// `next_key` receives the number of stored records and runs under the
    /// same write lock as the insert. `build` receives the chosen key.
    /// Returns a copy of the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyCollision`] if the computed key is taken.
    pub fn insert_with<F, B>(&self, next_key: F, build: B) -> Result<V, StoreError>
    where
        F: FnOnce(usize) -> K,
        B: FnOnce(&K) -> V,
    {
        let mut entries = self.entries.write();
        let key = next_key(entries.len());

        match entries.entry(key) {
            Entry::Occupied(slot) => Err(StoreError::KeyCollision {
                key: slot.key().to_string(),
            }),
            Entry::Vacant(slot) => {
                let value = build(slot.key());
                Ok(slot.insert(value).clone())
            }
        }
    }

    /// Returns a copy of the record stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K, V> Default for KeyedStore<K, V>
where
    K: Eq + Hash + Display,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_insert_and_get() {
        let store = KeyedStore::<String, String>::new();

        store
            .insert("abc".to_string(), "https://example.com".to_string())
            .unwrap();

        assert_eq!(store.get("abc"), Some("https://example.com".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_key() {
        let store = KeyedStore::<String, String>::new();

        assert!(store.get("nope").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_never_overwrites() {
        let store = KeyedStore::<String, String>::new();
        store
            .insert("abc".to_string(), "https://first.com".to_string())
            .unwrap();

        let err = store
            .insert("abc".to_string(), "https://second.com".to_string())
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::KeyCollision {
                key: "abc".to_string()
            }
        );
        assert_eq!(store.get("abc"), Some("https://first.com".to_string()));
    }

    #[test]
    fn test_insert_with_uses_current_len() {
        let store = KeyedStore::<u64, String>::new();

        let first = store
            .insert_with(|len| len as u64 + 1, |id| format!("record-{id}"))
            .unwrap();
        let second = store
            .insert_with(|len| len as u64 + 1, |id| format!("record-{id}"))
            .unwrap();

        assert_eq!(first, "record-1");
        assert_eq!(second, "record-2");
        assert_eq!(store.get(&2), Some("record-2".to_string()));
    }

    #[test]
    fn test_insert_with_collision_keeps_existing() {
        let store = KeyedStore::<u64, String>::new();
        store.insert(1, "seeded".to_string()).unwrap();

        // len is 1, so the computed key collides with the seed
        let err = store
            .insert_with(|len| len as u64, |_| "new".to_string())
            .unwrap_err();

        assert!(matches!(err, StoreError::KeyCollision { .. }));
        assert_eq!(store.get(&1), Some("seeded".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_returns_copy() {
        let store = KeyedStore::<u64, Vec<u8>>::new();
        store.insert(1, vec![1, 2, 3]).unwrap();

        let mut copy = store.get(&1).unwrap();
        copy.push(4);

        assert_eq!(store.get(&1), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_concurrent_insert_with_assigns_distinct_keys() {
        let store = Arc::new(KeyedStore::<u64, u64>::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| store.insert_with(|len| len as u64 + 1, |id| *id).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 800);
        assert_eq!(store.len(), 800);
        assert!(ids.iter().all(|id| (1..=800).contains(id)));
    }
}
