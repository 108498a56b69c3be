// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key, registration, and error vocabulary shared by every `cachet` storage tier.
//!
//! This crate has no concurrency and no I/O of its own. It exists so that a storage tier
//! (such as `cachet_memory`) and the orchestrating facade (`cachet`) can agree on what a
//! registration looks like, what a tier contract requires, and how failures are named,
//! without either one depending on the other's internals.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod error;
mod executor;
mod registration;
mod tier;

pub use error::{CacheError, CacheErrorKind, ExecutionFailure};
pub use executor::execute;
pub use registration::{ComputeFn, Registration};
pub use tier::CacheTier;

use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by any type usable as a cache key.
///
/// Blanket-implemented for every type that already satisfies the bound.
pub trait CacheKey: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> CacheKey for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
