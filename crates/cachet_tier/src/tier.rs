// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::HashMap;
use std::time::Duration;

use crate::CacheKey;

/// Contract every storage tier implements.
///
/// A tier is a pure, synchronous keyed store with TTL-based freshness: linearizable per key,
/// never blocks, never fails. `cachet_memory::MemoryStore` is the only tier shipped today; the
/// trait exists so the facade crate doesn't need to know which tier it's talking to.
pub trait CacheTier<K, V>: Send + Sync
where
    K: CacheKey,
{
    /// Records `{value, now + ttl, now}`, overwriting any prior slot for `key`.
    fn put(&self, key: K, value: V, ttl: Duration);

    /// Returns `Some(value)` only if a slot exists and is still fresh.
    fn get(&self, key: &K) -> Option<V>;

    /// Returns every currently-fresh entry.
    fn snapshot(&self) -> HashMap<K, V>;
}
