// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A periodic, self-rehydrating cache.
//!
//! Register a zero-argument compute function under a key, with a time-to-live and a refresh
//! interval. `cachet` runs one independent recomputation loop per key on its own schedule, and
//! serves the most recently successful result to concurrent readers with bounded latency —
//! callers never trigger a compute themselves, they only read the last stored value or wait for
//! the next one.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use cachet::Cache;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let cache: Cache<&str, i32> = Cache::new();
//!
//! cache
//!     .register_function("answer", Duration::from_secs(30), Duration::from_secs(5), || async {
//!         Ok::<_, String>(42)
//!     })
//!     .unwrap();
//!
//! let value = cache.get(&"answer", Duration::from_secs(1)).await.unwrap();
//! assert_eq!(value, 42);
//! # }
//! ```
//!
//! # Concurrency model
//!
//! Per key, at most one compute is ever in flight (single-flight by construction: only the
//! per-key worker loop runs computes, the read path only subscribes). Readers that arrive while
//! a key has never produced a value wait on the next successful compute, up to their own
//! timeout; readers never wait on each other or on unrelated keys.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cache;
mod clock;
mod registry;
mod worker;

pub use cache::Cache;
pub use cachet_tier::{CacheError, CacheErrorKind};
pub use clock::Clock;
pub use worker::WorkerStatus;
