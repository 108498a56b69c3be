// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// The user-visible failure modes of the cache's public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheErrorKind {
    /// No registration exists for the requested key.
    #[default]
    NotRegistered,
    /// A registration already exists for this key.
    AlreadyRegistered,
    /// The supplied TTL/refresh-interval pair is invalid (refresh interval must be shorter
    /// than the TTL).
    InvalidParameters,
    /// The caller's deadline elapsed before a fresh value became available.
    Timeout,
}

impl fmt::Display for CacheErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotRegistered => "not registered",
            Self::AlreadyRegistered => "already registered",
            Self::InvalidParameters => "invalid parameters",
            Self::Timeout => "timed out",
        };
        f.write_str(text)
    }
}

/// Error returned from `cachet`'s public API.
///
/// Carries the offending key's debug representation for diagnostics; the value itself stays
/// opaque to the cache, so only `Debug` output (never the value) ever appears in an error.
#[ohno::error]
#[display("{kind} (key {key})")]
pub struct CacheError {
    pub kind: CacheErrorKind,
    pub key: String,
}

impl CacheError {
    /// Builds a `CacheError` for `key`'s debug representation.
    #[must_use]
    pub fn for_key(kind: CacheErrorKind, key: &impl std::fmt::Debug) -> Self {
        Self::new(kind, format!("{key:?}"))
    }
}

/// Internal-only outcome of running a registered function. Never surfaces past the scheduler:
/// a failure here leaves the store and the waiter hub untouched.
#[derive(Debug)]
pub enum ExecutionFailure {
    /// The function returned `Err`.
    Failed(String),
    /// The function panicked.
    Crashed(String),
}

impl fmt::Display for ExecutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "compute failed: {reason}"),
            Self::Crashed(reason) => write!(f, "compute panicked: {reason}"),
        }
    }
}
