// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyspawn::Spawner;
use cachet_memory::{MemoryStore, WaiterHub};
use cachet_tier::{CacheKey, CacheTier as _, ExecutionFailure, Registration, execute};
use tick::Delay;
use tokio::sync::Notify;

use crate::clock::Clock;

/// A key's position in the state machine driving its recomputation loop: Idle → Running →
/// Sleeping and back, torn down into Stopping on deregistration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    /// Registered, first compute not yet started. Observed only in the instant between
    /// insertion and the loop's first poll.
    Idle,
    /// A compute is in flight.
    Running,
    /// Between computes, waiting out the refresh interval.
    Sleeping,
    /// Torn down; the loop has exited or will at its next check.
    Stopping,
}

struct WorkerState {
    status: Mutex<WorkerStatus>,
    stopping: AtomicBool,
    cancel_sleep: Notify,
}

impl WorkerState {
    fn set(&self, status: WorkerStatus) {
        *self.status.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = status;
    }

    fn is_stopping(&self) -> bool {
        self.stopping.load(Ordering::SeqCst)
    }
}

/// Handle to a key's spawned recomputation loop.
///
/// Dropping the handle does not cancel the loop — cancellation goes through `stop`, which sets
/// the stopping flag and cancels a pending sleep. The spawned task is otherwise fire-and-forget;
/// `anyspawn::JoinHandle` has no `Drop`-cancel semantics, so we never rely on one.
pub(crate) struct Worker {
    state: Arc<WorkerState>,
    _task: anyspawn::JoinHandle<()>,
}

impl Worker {
    /// Spawns the per-key loop. The loop runs its first compute as its very first action,
    /// matching "kick off the first compute (state Idle→Running)" at registration time.
    pub(crate) fn spawn<K, V>(
        registration: Arc<Registration<K, V>>,
        store: Arc<MemoryStore<K, V>>,
        waiters: Arc<WaiterHub<K, V>>,
        clock: Clock,
        spawner: &Spawner,
    ) -> Self
    where
        K: CacheKey,
        V: Clone + Send + Sync + 'static,
    {
        let state = Arc::new(WorkerState {
            status: Mutex::new(WorkerStatus::Idle),
            stopping: AtomicBool::new(false),
            cancel_sleep: Notify::new(),
        });

        let loop_state = Arc::clone(&state);
        let task = spawner.spawn(async move {
            run_loop(registration, store, waiters, clock, loop_state).await;
        });

        Self { state, _task: task }
    }

    /// The loop's current status, for introspection only — nothing in the engine itself makes
    /// decisions based on this value.
    pub(crate) fn status(&self) -> WorkerStatus {
        *self.state.status.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Initiates teardown: marks the loop stopping and cancels a pending sleep. If a compute is
    /// currently running, it is left to finish; the loop itself checks the stopping flag right
    /// after and suppresses the publish.
    pub(crate) fn stop(&self) {
        self.state.stopping.store(true, Ordering::SeqCst);
        // `notify_one`, not `notify_waiters`: it buffers a permit if the loop isn't sleeping
        // yet, so a `stop` that races the Running→Sleeping transition still cancels the sleep
        // the loop is about to enter, rather than waiting out a full `notified()` with nothing
        // there to wake.
        self.state.cancel_sleep.notify_one();
    }
}

async fn run_loop<K, V>(
    registration: Arc<Registration<K, V>>,
    store: Arc<MemoryStore<K, V>>,
    waiters: Arc<WaiterHub<K, V>>,
    clock: Clock,
    state: Arc<WorkerState>,
) where
    K: CacheKey,
    V: Clone + Send + Sync + 'static,
{
    loop {
        state.set(WorkerStatus::Running);
        tracing::debug!(key = ?registration.key, "compute starting");

        let outcome = execute(&*registration).await;

        // Deregistration raced with this compute: the result is discarded unpublished,
        // regardless of whether it succeeded.
        if state.is_stopping() {
            break;
        }

        match outcome {
            Ok(value) => {
                store.put(registration.key.clone(), value.clone(), registration.ttl);
                waiters.publish(&registration.key, value);
                tracing::info!(key = ?registration.key, "compute published a fresh value");
            }
            Err(failure) => log_failure(&registration.key, &failure),
        }

        if state.is_stopping() {
            break;
        }

        state.set(WorkerStatus::Sleeping);
        tokio::select! {
            () = Delay::new(clock.inner(), registration.refresh_interval) => {}
            () = state.cancel_sleep.notified() => {}
        }

        if state.is_stopping() {
            break;
        }
    }

    // Releasing outstanding waiters with `NotRegistered` is the facade's job, done synchronously
    // from `Cache::deregister` — a `Running` compute here may never return (a hung user
    // function), and blocked readers need to see `NotRegistered` promptly rather than wait on
    // this loop to notice the stop.
    state.set(WorkerStatus::Stopping);
}

fn log_failure<K: std::fmt::Debug>(key: &K, failure: &ExecutionFailure) {
    match failure {
        ExecutionFailure::Failed(reason) => {
            tracing::warn!(?key, %reason, "compute returned an error; keeping last good value");
        }
        ExecutionFailure::Crashed(reason) => {
            tracing::warn!(?key, %reason, "compute panicked; keeping last good value");
        }
    }
}
