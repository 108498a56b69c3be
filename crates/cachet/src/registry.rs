// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use cachet_tier::{CacheKey, Registration};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Maps key → registration. Insert-if-absent uses the occupied/vacant entry pattern to avoid a
/// check-then-act race between two callers registering the same key concurrently.
pub(crate) struct Registry<K, V> {
    entries: DashMap<K, Arc<Registration<K, V>>>,
}

impl<K, V> Registry<K, V>
where
    K: CacheKey,
{
    pub(crate) fn new() -> Self {
        Self { entries: DashMap::new() }
    }

    /// Inserts `registration` only if `key` is absent, leaving the existing registration
    /// untouched on conflict. Returns `false` if a registration already existed.
    pub(crate) fn insert(&self, registration: Registration<K, V>) -> bool {
        match self.entries.entry(registration.key.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(registration));
                true
            }
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<Arc<Registration<K, V>>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub(crate) fn remove(&self, key: &K) -> Option<Arc<Registration<K, V>>> {
        self.entries.remove(key).map(|(_, registration)| registration)
    }

    pub(crate) fn keys(&self) -> Vec<K> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }
}
