// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::Instant;

/// One key's stored result: the last value a compute published, and when it expires.
#[derive(Debug, Clone)]
pub struct Slot<V> {
    pub value: V,
    pub expires_at: Instant,
    pub last_refresh_at: Instant,
}

impl<V> Slot<V> {
    pub(crate) fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}
