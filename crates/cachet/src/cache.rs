// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyspawn::Spawner;
use cachet_memory::{MemoryStore, WaiterHub};
use cachet_tier::{CacheError, CacheErrorKind, CacheKey, CacheTier as _, Registration};
use dashmap::DashMap;

use crate::clock::Clock;
use crate::registry::Registry;
use crate::worker::{Worker, WorkerStatus};

struct Inner<K, V> {
    registry: Registry<K, V>,
    store: Arc<MemoryStore<K, V>>,
    waiters: Arc<WaiterHub<K, V>>,
    workers: DashMap<K, Worker>,
    clock: Clock,
    spawner: Spawner,
}

/// A periodic, self-rehydrating cache.
///
/// Cheap to `Clone` — every clone shares the same registry, store, waiter hub and worker
/// handles, the same handle-over-`Arc` shape `tick::Clock` and `anyspawn::Spawner` use.
pub struct Cache<K, V> {
    inner: Arc<Inner<K, V>>,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<K, V> Cache<K, V>
where
    K: CacheKey,
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache driven by the Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime context, same as [`tick::Clock::new_tokio`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock_and_spawner(Clock::new_tokio(), Spawner::new_tokio())
    }

    /// Creates an empty cache driven by an explicit clock and task spawner.
    ///
    /// This is how a custom executor or a deterministic test clock gets plugged in — both are
    /// plain constructor arguments, never process-global state.
    #[must_use]
    pub fn with_clock_and_spawner(clock: Clock, spawner: Spawner) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry: Registry::new(),
                store: Arc::new(MemoryStore::new(clock.inner().clone())),
                waiters: Arc::new(WaiterHub::new()),
                workers: DashMap::new(),
                clock,
                spawner,
            }),
        }
    }

    /// Registers a zero-argument compute function under `key` with the given TTL and refresh
    /// interval, and starts its recomputation loop.
    ///
    /// Returns once the loop has been started, not once its first result has landed — callers
    /// that need the first value should follow up with [`Cache::get`].
    ///
    /// # Errors
    ///
    /// Returns [`CacheErrorKind::InvalidParameters`] if `refresh_interval >= ttl` or `ttl` is
    /// zero, and [`CacheErrorKind::AlreadyRegistered`] if `key` is already registered. Neither
    /// failure changes any existing state.
    pub fn register_function<F, Fut, E>(
        &self,
        key: K,
        ttl: Duration,
        refresh_interval: Duration,
        compute: F,
    ) -> Result<(), CacheError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: std::fmt::Display + Send + 'static,
    {
        let registration = Registration::new(key.clone(), ttl, refresh_interval, compute)
            .map_err(|kind| CacheError::for_key(kind, &key))?;

        if !self.inner.registry.insert(registration) {
            return Err(CacheError::for_key(CacheErrorKind::AlreadyRegistered, &key));
        }

        // We just inserted it under the same key, so this lookup cannot miss.
        let registration = self.inner.registry.get(&key).expect("registration was just inserted");

        let worker = Worker::spawn(
            registration,
            Arc::clone(&self.inner.store),
            Arc::clone(&self.inner.waiters),
            self.inner.clock.clone(),
            &self.inner.spawner,
        );
        self.inner.workers.insert(key.clone(), worker);

        tracing::debug!(?key, "registered and started recomputation loop");
        Ok(())
    }

    /// Returns the most recently computed value for `key`, waiting up to `timeout` if none is
    /// immediately available.
    ///
    /// # Errors
    ///
    /// Returns [`CacheErrorKind::NotRegistered`] if `key` has no registration, and
    /// [`CacheErrorKind::Timeout`] if `timeout` elapses before a fresh value arrives.
    pub async fn get(&self, key: &K, timeout: Duration) -> Result<V, CacheError> {
        if let Some(value) = self.inner.store.get(key) {
            return Ok(value);
        }

        if self.inner.registry.get(key).is_none() {
            return Err(CacheError::for_key(CacheErrorKind::NotRegistered, key));
        }

        self.inner
            .waiters
            .wait(key, timeout, self.inner.clock.inner())
            .await
            .map_err(|kind| CacheError::for_key(kind, key))
    }

    /// Stops `key`'s recomputation loop and removes its registration.
    ///
    /// Idempotent: deregistering a key that is not registered is a no-op that returns
    /// [`CacheErrorKind::NotRegistered`].
    ///
    /// # Errors
    ///
    /// Returns [`CacheErrorKind::NotRegistered`] if `key` has no registration.
    pub fn deregister(&self, key: &K) -> Result<(), CacheError> {
        let Some((_, worker)) = self.inner.workers.remove(key) else {
            return Err(CacheError::for_key(CacheErrorKind::NotRegistered, key));
        };

        worker.stop();
        self.inner.registry.remove(key);
        // Done here, synchronously, rather than left to the worker loop: a currently-`Running`
        // compute may be a hung user function that never returns, and a blocked reader must
        // observe `NotRegistered` promptly rather than wait on it.
        self.inner.waiters.release_not_registered(key);

        tracing::debug!(?key, "deregistered");
        Ok(())
    }

    /// Every currently-fresh key/value pair. For tests and operational observability.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<K, V> {
        self.inner.store.snapshot()
    }

    /// Every currently-registered key, in no particular order.
    #[must_use]
    pub fn registered_keys(&self) -> Vec<K> {
        self.inner.registry.keys()
    }

    /// The recomputation loop's current state for `key`, or `None` if `key` is not registered.
    ///
    /// Read-only: nothing in the engine makes decisions off this value, it exists purely for
    /// tests and dashboards.
    #[must_use]
    pub fn worker_status(&self, key: &K) -> Option<WorkerStatus> {
        self.inner.workers.get(key).map(|worker| worker.status())
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: CacheKey,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use tick::ClockControl;

    use super::*;

    fn frozen_cache<K, V>() -> (ClockControl, Cache<K, V>)
    where
        K: CacheKey,
        V: Clone + Send + Sync + 'static,
    {
        let control = ClockControl::new();
        let cache = Cache::with_clock_and_spawner(Clock::from(control.to_clock()), Spawner::new_tokio());
        (control, cache)
    }

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(Cache<&str, i32>: Clone, Send, Sync);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn register_then_get_returns_the_computed_value() {
        let (_control, cache) = frozen_cache::<&str, i32>();
        cache
            .register_function("answer", Duration::from_secs(30), Duration::from_secs(5), || async {
                Ok::<_, String>(42)
            })
            .unwrap();

        let value = cache.get(&"answer", Duration::from_secs(5)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_on_unregistered_key_fails_fast() {
        let (_control, cache) = frozen_cache::<&str, i32>();
        let result = cache.get(&"absent", Duration::from_millis(1)).await;
        assert_eq!(result.unwrap_err().kind, CacheErrorKind::NotRegistered);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn duplicate_registration_is_rejected() {
        let (_control, cache) = frozen_cache::<&str, i32>();
        cache
            .register_function("k", Duration::from_secs(30), Duration::from_secs(5), || async {
                Ok::<_, String>(1)
            })
            .unwrap();

        let result = cache.register_function("k", Duration::from_secs(30), Duration::from_secs(5), || async {
            Ok::<_, String>(2)
        });

        assert_eq!(result.unwrap_err().kind, CacheErrorKind::AlreadyRegistered);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn invalid_parameters_are_rejected() {
        let (_control, cache) = frozen_cache::<&str, i32>();
        let result =
            cache.register_function("k", Duration::from_secs(1), Duration::from_secs(1), || async { Ok::<_, String>(1) });
        assert_eq!(result.unwrap_err().kind, CacheErrorKind::InvalidParameters);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn deregister_releases_pending_waiters() {
        let (_control, cache) = frozen_cache::<&str, i32>();
        cache
            .register_function("k", Duration::from_secs(30), Duration::from_secs(5), || async {
                // Never resolves before the test ends, so `get` below actually has to wait.
                std::future::pending::<Result<i32, String>>().await
            })
            .unwrap();

        let waiting = cache.clone();
        let waiter = tokio::spawn(async move { waiting.get(&"k", Duration::from_secs(30)).await });
        tokio::task::yield_now().await;

        cache.deregister(&"k").unwrap();

        let result = waiter.await.unwrap();
        assert_eq!(result.unwrap_err().kind, CacheErrorKind::NotRegistered);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn deregister_on_absent_key_is_not_registered() {
        let (_control, cache) = frozen_cache::<&str, i32>();
        let result = cache.deregister(&"absent");
        assert_eq!(result.unwrap_err().kind, CacheErrorKind::NotRegistered);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn registered_keys_reflects_registrations() {
        let (_control, cache) = frozen_cache::<&str, i32>();
        cache
            .register_function("a", Duration::from_secs(30), Duration::from_secs(5), || async {
                Ok::<_, String>(1)
            })
            .unwrap();
        cache
            .register_function("b", Duration::from_secs(30), Duration::from_secs(5), || async {
                Ok::<_, String>(2)
            })
            .unwrap();

        let mut keys = cache.registered_keys();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failure_preserves_the_last_good_value() {
        let calls = Arc::new(AtomicU32::new(0));
        let (control, cache) = frozen_cache::<&str, i32>();

        let counting = Arc::clone(&calls);
        cache
            .register_function("k", Duration::from_secs(10), Duration::from_secs(1), move || {
                let calls = Arc::clone(&counting);
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                    if n == 2 { Err("boom".to_string()) } else { Ok(n as i32) }
                }
            })
            .unwrap();

        assert_eq!(cache.get(&"k", Duration::from_secs(5)).await.unwrap(), 1);

        // Let the second (failing) compute run; the slot must still hold the first value.
        control.advance(Duration::from_secs(1));
        for _ in 0..50 {
            if calls.load(Ordering::SeqCst) >= 2 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(cache.get(&"k", Duration::from_millis(1)).await.unwrap(), 1);
    }
}
