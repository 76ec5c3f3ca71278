//! Caller-requested suspension between card operations.

use std::time::Duration;

/// Sleep for `duration` without blocking the runtime.
///
/// This is an explicit pause (e.g. between a block write and the read that
/// verifies it), not a recovery timeout.
pub async fn pause(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
