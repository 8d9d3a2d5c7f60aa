//! Concurrent key/value store backing the mapping facades.

mod key;
pub use key::MappingKey;

use crate::{Error, Result};
use dashmap::{mapref::entry::Entry, DashMap};
use std::fmt;

/// A thread-safe map from [`MappingKey`] to `V`.
///
/// Single-key operations (`try_add`, `try_get`, `try_remove`, `try_update`)
/// are atomic with respect to each other. Operations on different keys never
/// affect each other's outcome.
pub struct Registry<V> {
    entries: DashMap<MappingKey, V>,
}

impl<V: Clone + PartialEq> Registry<V> {
    /// Creates an empty registry.
    pub fn new() -> Registry<V> {
        Registry {
            entries: DashMap::new(),
        }
    }

    /// Inserts `value` if `key` has no entry. Returns `true` if inserted.
    ///
    /// Of several concurrent calls for the same absent key, exactly one
    /// succeeds.
    pub fn try_add(&self, key: MappingKey, value: V) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Replaces the entry for `key` with `value` if it currently equals
    /// `expected`. Returns `true` if replaced.
    pub fn try_update(&self, key: &MappingKey, value: V, expected: &V) -> bool {
        match self.entries.get_mut(key) {
            Some(mut current) if *current == *expected => {
                *current = value;
                true
            }
            _ => false,
        }
    }

    pub fn try_get(&self, key: &MappingKey) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Removes the entry for `key`, returning its value if there was one.
    pub fn try_remove(&self, key: &MappingKey) -> Option<V> {
        let removed = self.entries.remove(key).map(|(_, value)| value);
        if removed.is_some() {
            tracing::trace!(%key, "mapping removed");
        }
        removed
    }

    pub fn contains_key(&self, key: &MappingKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes every entry.
    ///
    /// Adds running concurrently with `clear` may land after it, so the
    /// registry is not guaranteed to be empty once `clear` returns.
    pub fn clear(&self) {
        self.entries.clear();
        tracing::trace!("registry cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a mapping, enforcing one value per key.
    ///
    /// If `key` has no entry, `value` is inserted. If it has one and `force`
    /// is `false`, a mapping exists error is returned and nothing changes.
    /// If `force` is `true`, the entry is replaced with a single
    /// compare-and-swap against the value just read.
    ///
    /// The forced path does not retry: when another writer changes the entry
    /// between the read and the swap, the swap is skipped and `add` still
    /// returns `Ok(())`.
    pub fn add(&self, key: MappingKey, value: V, force: bool) -> Result<()> {
        let current = self.try_get(&key);
        self.add_after_read(key, value, force, current)
    }

    /// Applies the add policy given `current`, the value read for `key` just
    /// before. The entry may have changed since.
    fn add_after_read(
        &self,
        key: MappingKey,
        value: V,
        force: bool,
        current: Option<V>,
    ) -> Result<()> {
        let Some(current) = current else {
            if self.try_add(key.clone(), value.clone()) {
                tracing::trace!(%key, "mapping added");
                return Ok(());
            }

            // Lost the insert to a concurrent writer.
            return match self.try_get(&key) {
                Some(current) => self.add_after_read(key, value, force, Some(current)),
                None => {
                    tracing::debug!(%key, "mapping removed while being added; skipped");
                    Ok(())
                }
            };
        };

        if !force {
            return Err(Error::mapping_exists(&key));
        }

        if self.try_update(&key, value, &current) {
            tracing::trace!(%key, "mapping overwritten");
        } else {
            tracing::debug!(%key, "mapping changed concurrently; forced overwrite skipped");
        }

        Ok(())
    }
}

impl<V: Clone + PartialEq> Default for Registry<V> {
    fn default() -> Self {
        Registry::new()
    }
}

impl<V> fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .finish()
    }
}
