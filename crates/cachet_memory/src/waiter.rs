// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::Duration;

use cachet_tier::{CacheErrorKind, CacheKey};
use dashmap::DashMap;
use tick::{Clock, FutureExt as _};
use tokio::sync::oneshot;

/// What a blocked reader was released with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome<V> {
    /// A compute succeeded while this waiter was pending.
    Ready(V),
    /// The key was deregistered while this waiter was pending.
    NotRegistered,
}

struct Waiter<V> {
    sender: oneshot::Sender<WaitOutcome<V>>,
}

/// Per-key set of pending readers, and the rendezvous point computes publish through.
///
/// `wait` records a pending waiter, `publish` atomically drains and wakes every waiter present
/// at that instant, and a waiter whose deadline elapses first releases itself with a timeout
/// without touching the worker.
pub struct WaiterHub<K, V> {
    pending: DashMap<K, Vec<Waiter<V>>>,
}

impl<K, V> WaiterHub<K, V>
where
    K: CacheKey,
{
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: DashMap::new() }
    }

    /// Registers a pending waiter for `key` and blocks the caller until it is released by a
    /// publish for `key`, a deregistration of `key`, or `timeout` elapsing — whichever comes
    /// first. `clock` drives the deadline, so tests can control it deterministically.
    pub async fn wait(&self, key: &K, timeout: Duration, clock: &Clock) -> Result<V, CacheErrorKind> {
        let (sender, receiver) = oneshot::channel();

        self.pending.entry(key.clone()).or_default().push(Waiter { sender });

        match receiver.timeout(timeout, clock).await {
            Ok(Ok(WaitOutcome::Ready(value))) => Ok(value),
            Ok(Ok(WaitOutcome::NotRegistered)) => Err(CacheErrorKind::NotRegistered),
            // Sender dropped without sending: only happens if the hub itself is torn down.
            Ok(Err(_)) => Err(CacheErrorKind::NotRegistered),
            Err(_elapsed) => {
                self.remove_stale(key);
                Err(CacheErrorKind::Timeout)
            }
        }
    }

    /// Atomically drains every waiter currently pending for `key` and wakes each with `value`.
    /// Waiters that subscribe after this call was made observe none of it — they wait for the
    /// next publish.
    pub fn publish(&self, key: &K, value: V)
    where
        V: Clone,
    {
        let Some((_, waiters)) = self.pending.remove(key) else {
            return;
        };
        for waiter in waiters {
            let _ = waiter.sender.send(WaitOutcome::Ready(value.clone()));
        }
    }

    /// Drains every waiter for `key` and releases each with `NotRegistered`.
    pub fn release_not_registered(&self, key: &K) {
        let Some((_, waiters)) = self.pending.remove(key) else {
            return;
        };
        for waiter in waiters {
            let _ = waiter.sender.send(WaitOutcome::NotRegistered);
        }
    }

    /// Drops a key's entry if every sender it holds is already gone (its timed-out waiters
    /// already returned). Keeps the map from retaining empty `Vec`s indefinitely in the
    /// never-published, always-timed-out case.
    fn remove_stale(&self, key: &K) {
        self.pending.remove_if(key, |_, waiters| waiters.iter().all(|w| w.sender.is_closed()));
    }
}

impl<K, V> Default for WaiterHub<K, V>
where
    K: CacheKey,
{
    fn default() -> Self {
        Self::new()
    }
}
