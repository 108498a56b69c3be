// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::HashMap;
use std::time::Duration;

use cachet_tier::{CacheKey, CacheTier};
use dashmap::DashMap;
use tick::Clock;

use crate::slot::Slot;

/// In-memory [`CacheTier`] backed by a [`DashMap`], keyed freshness checked against an
/// injected [`Clock`] so tests can control TTL boundaries without real sleeps.
#[derive(Debug)]
pub struct MemoryStore<K, V> {
    slots: DashMap<K, Slot<V>>,
    clock: Clock,
}

impl<K, V> MemoryStore<K, V>
where
    K: CacheKey,
{
    /// Creates an empty store driven by `clock`.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { slots: DashMap::new(), clock }
    }
}

impl<K, V> CacheTier<K, V> for MemoryStore<K, V>
where
    K: CacheKey,
    V: Clone + Send + Sync,
{
    fn put(&self, key: K, value: V, ttl: Duration) {
        let now = self.clock.instant();
        let Some(expires_at) = now.checked_add(ttl) else {
            return;
        };

        self.slots.insert(key, Slot { value, expires_at, last_refresh_at: now });

        // Opportunistic sweep: drop a handful of expired entries while we're already
        // touching the map. Not exhaustive by design — this is not the only place a stale
        // slot gets reclaimed, `get` checks freshness too.
        if self.slots.len() % 64 == 0 {
            self.slots.retain(|_, slot| slot.is_fresh(now));
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.instant();
        let slot = self.slots.get(key)?;
        slot.is_fresh(now).then(|| slot.value.clone())
    }

    fn snapshot(&self) -> HashMap<K, V> {
        let now = self.clock.instant();
        self.slots
            .iter()
            .filter(|entry| entry.value().is_fresh(now))
            .map(|entry| (entry.key().clone(), entry.value().value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn put_then_get_returns_fresh_value() {
        let store: MemoryStore<&str, i32> = MemoryStore::new(Clock::new_frozen());
        store.put("k", 1, Duration::from_secs(10));
        assert_eq!(store.get(&"k"), Some(1));
    }

    #[test]
    fn get_on_absent_key_is_none() {
        let store: MemoryStore<&str, i32> = MemoryStore::new(Clock::new_frozen());
        assert_eq!(store.get(&"missing"), None);
    }

    #[test]
    fn expired_slot_is_absent() {
        let control = tick::ClockControl::new();
        let clock = control.to_clock();
        let store: MemoryStore<&str, i32> = MemoryStore::new(clock);

        store.put("k", 1, Duration::from_secs(1));
        assert_eq!(store.get(&"k"), Some(1));

        control.advance(Duration::from_secs(2));
        assert_eq!(store.get(&"k"), None);
    }

    #[test]
    fn put_overwrites_prior_slot() {
        let store: MemoryStore<&str, i32> = MemoryStore::new(Clock::new_frozen());
        store.put("k", 1, Duration::from_secs(10));
        store.put("k", 2, Duration::from_secs(10));
        assert_eq!(store.get(&"k"), Some(2));
    }

    #[test]
    fn snapshot_contains_only_fresh_entries() {
        let control = tick::ClockControl::new();
        let clock = control.to_clock();
        let store: MemoryStore<&str, i32> = MemoryStore::new(clock);

        store.put("fresh", 1, Duration::from_secs(10));
        store.put("stale", 2, Duration::from_secs(1));

        control.advance(Duration::from_secs(2));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.get("fresh"), Some(&1));
        assert_eq!(snapshot.get("stale"), None);
    }
}
