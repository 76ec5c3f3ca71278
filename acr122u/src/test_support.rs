//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::device::{LifecycleEvent, ReaderConfig, ReaderMonitor, prepare_reader};
use crate::transport::MockTransport;
use crate::types::StatusBits;
use crate::Result;

/// ATR of a MIFARE Classic 1K card on an ACR122U.
pub const CLASSIC_1K_ATR: [u8; 20] = [
    0x3B, 0x8F, 0x80, 0x01, 0x80, 0x4F, 0x0C, 0xA0, 0x00, 0x00, 0x03, 0x06, 0x03, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x6A,
];

/// Status bits reported when a card is in the field.
pub const CARD_PRESENT: StatusBits = StatusBits::new(0x0022);

/// Status bits reported when the field is empty.
pub const CARD_ABSENT: StatusBits = StatusBits::new(0x0012);

/// Start a monitor over `mock` whose events are all forwarded to the
/// returned receiver.
#[doc(hidden)]
pub async fn monitor_with_channel(
    mock: &MockTransport,
    config: ReaderConfig,
) -> Result<(ReaderMonitor, UnboundedReceiver<LifecycleEvent>)> {
    let (tx, rx) = mpsc::unbounded_channel();
    let monitor = prepare_reader(Arc::new(mock.clone()), config.with_channel(tx)).await?;
    Ok((monitor, rx))
}
