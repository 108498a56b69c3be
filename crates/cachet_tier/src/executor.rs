// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::panic::AssertUnwindSafe;

use futures::FutureExt as _;

use crate::{ExecutionFailure, Registration};

/// Runs a registration's compute function once, converting both an `Err` result and a panic
/// into an [`ExecutionFailure`]. Never touches a store or a waiter hub — publishing the result
/// is the scheduler's job.
pub async fn execute<K, V>(registration: &Registration<K, V>) -> Result<V, ExecutionFailure> {
    match AssertUnwindSafe(registration.call()).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(reason)) => Err(ExecutionFailure::Failed(reason)),
        Err(panic) => Err(ExecutionFailure::Crashed(panic_message(&panic))),
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "compute panicked with a non-string payload".to_string()
    }
}
