// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::{CacheErrorKind, CacheKey};

/// A boxed, type-erased compute function.
///
/// Every registration under one `Cache<K, V>` shares the same success type `V`, so the function
/// itself only needs to be erased over its closure/future type, not over `V`.
pub type ComputeFn<V> = Arc<dyn Fn() -> Pin<Box<dyn Future<Output = Result<V, String>> + Send>> + Send + Sync>;

/// An immutable registration: a key, a zero-argument compute function, and its TTL/refresh
/// schedule.
pub struct Registration<K, V> {
    pub key: K,
    pub ttl: Duration,
    pub refresh_interval: Duration,
    compute: ComputeFn<V>,
}

impl<K, V> Registration<K, V>
where
    K: CacheKey,
{
    /// Builds a registration, enforcing `0 <= refresh_interval < ttl`.
    pub fn new<F, Fut, E>(key: K, ttl: Duration, refresh_interval: Duration, compute: F) -> Result<Self, CacheErrorKind>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: std::fmt::Display + Send + 'static,
        V: Send + 'static,
    {
        if ttl.is_zero() || refresh_interval >= ttl {
            return Err(CacheErrorKind::InvalidParameters);
        }

        let compute: ComputeFn<V> = Arc::new(move || {
            let fut = compute();
            Box::pin(async move { fut.await.map_err(|e| e.to_string()) })
        });

        Ok(Self { key, ttl, refresh_interval, compute })
    }

    /// Invokes the compute function, producing the boxed future the executor awaits.
    pub fn call(&self) -> Pin<Box<dyn Future<Output = Result<V, String>> + Send>> {
        (self.compute)()
    }
}
