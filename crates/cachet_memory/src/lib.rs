// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! In-memory cache tier and waiter hub for the `cachet` caching library.
//!
//! [`MemoryStore`] implements [`cachet_tier::CacheTier`] on top of a [`dashmap::DashMap`], giving
//! per-key linearizability without a single cache-wide lock. [`WaiterHub`] is the rendezvous
//! point between the scheduler (which publishes fresh values) and blocked `get` callers (which
//! subscribe and wait, with a deadline).

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod slot;
mod store;
mod waiter;

pub use slot::Slot;
pub use store::MemoryStore;
pub use waiter::{WaitOutcome, WaiterHub};
