// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Registers a key whose value changes on every recomputation and polls it a few times,
//! demonstrating that `get` observes each refresh without ever triggering a compute itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use cachet::Cache;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cache: Cache<&str, u32> = Cache::new();
    let counter = Arc::new(AtomicU32::new(0));

    let counting = Arc::clone(&counter);
    cache
        .register_function("tick", Duration::from_secs(10), Duration::from_millis(300), move || {
            let counter = Arc::clone(&counting);
            async move { Ok::<_, String>(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        })
        .unwrap();

    for _ in 0..5 {
        let value = cache.get(&"tick", Duration::from_secs(1)).await.unwrap();
        println!("tick = {value}");
        tokio::time::sleep(Duration::from_millis(350)).await;
    }

    cache.deregister(&"tick").unwrap();
}
