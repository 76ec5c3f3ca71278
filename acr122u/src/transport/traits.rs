// acr122u/src/transport/traits.rs

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::types::{Disposition, Protocol, ShareMode, StatusBits};
use crate::{Error, Result};

/// Reader enumeration and the process-wide notification stream.
///
/// Implementations wrap a PC/SC service (or a mock). The lifecycle only
/// ever talks to the service through this trait and `ReaderTransport`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Start watching for readers. The stream ends when the transport is
    /// closed.
    async fn watch(&self) -> Result<UnboundedReceiver<TransportEvent>>;

    /// Close the whole transport session.
    async fn close(&self) -> Result<()>;
}

/// One reader exposed by the transport.
#[async_trait]
pub trait ReaderTransport: Send + Sync {
    /// Reader name as reported by the service.
    fn name(&self) -> &str;

    /// Connect to the card in the reader and return the negotiated protocol.
    async fn connect(&self, mode: ShareMode) -> Result<Protocol>;

    /// Release the card, leaving it in the given state.
    async fn disconnect(&self, disposition: Disposition) -> Result<()>;

    /// Send `command` to the card; `response_len` is the receive buffer size.
    async fn transmit(
        &self,
        command: &[u8],
        response_len: usize,
        protocol: Protocol,
    ) -> Result<Vec<u8>>;

    /// Send `command` to the reader itself through `control_code`.
    async fn control(
        &self,
        command: &[u8],
        control_code: u32,
        response_len: usize,
    ) -> Result<Vec<u8>>;

    /// Close the reader session. The reader's event stream ends afterwards.
    async fn close(&self) -> Result<()>;
}

/// Raw status notification: state bits plus the ATR of the card, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReaderStatus {
    pub state: StatusBits,
    pub atr: Vec<u8>,
}

impl ReaderStatus {
    pub fn new(state: StatusBits, atr: impl Into<Vec<u8>>) -> Self {
        Self {
            state,
            atr: atr.into(),
        }
    }
}

/// Per-reader notification, delivered in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderEvent {
    Status(ReaderStatus),
    /// The reader went away; no further events follow.
    Ended,
    Error(Error),
}

/// Transport-level notification.
#[derive(Debug)]
pub enum TransportEvent {
    ReaderAdded(DiscoveredReader),
    Error(Error),
}

/// A newly attached reader with its own event stream.
pub struct DiscoveredReader {
    pub reader: Arc<dyn ReaderTransport>,
    pub events: UnboundedReceiver<ReaderEvent>,
}

impl DiscoveredReader {
    pub fn new(reader: Arc<dyn ReaderTransport>, events: UnboundedReceiver<ReaderEvent>) -> Self {
        Self { reader, events }
    }
}

impl fmt::Debug for DiscoveredReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveredReader")
            .field("reader", &self.reader.name())
            .finish_non_exhaustive()
    }
}
