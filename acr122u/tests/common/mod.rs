// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]

pub mod fixtures;

use std::time::Duration;

use acr122u::device::LifecycleEvent;
use tokio::sync::mpsc::UnboundedReceiver;

/// Receive the next lifecycle event, failing the test after one second.
pub async fn next_event(rx: &mut UnboundedReceiver<LifecycleEvent>) -> LifecycleEvent {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for lifecycle event")
        .expect("event channel closed")
}

/// Assert that no event is pending right now.
pub fn assert_no_event(rx: &mut UnboundedReceiver<LifecycleEvent>) {
    if let Ok(event) = rx.try_recv() {
        panic!("unexpected {} event", event.kind());
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
