// acr122u/src/device/handle.rs

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::OnceCell;

use crate::Result;
use crate::transport::{ReaderTransport, Transport};

/// Shared owner of the transport session. Clones share one close, so
/// the transport is closed at most once however many readers ask.
#[derive(Clone)]
pub struct TransportHandle {
    transport: Arc<dyn Transport>,
    closed: Arc<OnceCell<Result<()>>>,
}

impl TransportHandle {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            closed: Arc::new(OnceCell::new()),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.initialized()
    }

    /// Close the transport. Returns `false` when another call did it;
    /// that call has finished by the time this one returns.
    pub async fn close(&self) -> Result<bool> {
        let mut performed = false;
        let transport = self.transport.clone();
        self.closed
            .get_or_init(|| {
                performed = true;
                async move {
                    debug!("closing transport");
                    transport.close().await
                }
            })
            .await
            .clone()?;
        Ok(performed)
    }
}

impl fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportHandle")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Exit action of one reader: closes the reader session, then the shared
/// transport. Safe to call from handlers and error paths alike.
///
/// Clones share one reader close. Concurrent callers wait for it to finish,
/// so the transport is never closed before the reader.
#[derive(Clone)]
pub struct ExitHandle {
    reader: Arc<dyn ReaderTransport>,
    reader_closed: Arc<OnceCell<Result<()>>>,
    transport: TransportHandle,
}

impl ExitHandle {
    pub(crate) fn new(reader: Arc<dyn ReaderTransport>, transport: TransportHandle) -> Self {
        Self {
            reader,
            reader_closed: Arc::new(OnceCell::new()),
            transport,
        }
    }

    pub fn reader_name(&self) -> &str {
        self.reader.name()
    }

    /// True once the reader close has completed.
    pub fn is_closed(&self) -> bool {
        self.reader_closed.initialized()
    }

    /// Close the reader (once) and the transport (once per process).
    ///
    /// Every caller returns only after the reader close has finished. The
    /// transport is closed even when closing the reader fails; the reader
    /// error is returned first.
    pub async fn close(&self) -> Result<()> {
        let reader_result = self
            .reader_closed
            .get_or_init(|| async {
                debug!("[{}] closing reader", self.reader.name());
                let result = self.reader.close().await;
                if let Err(e) = &result {
                    warn!("[{}] failed to close reader: {}", self.reader.name(), e);
                }
                result
            })
            .await
            .clone();
        let transport_result = self.transport.close().await.map(|_| ());
        reader_result.and(transport_result)
    }
}

impl fmt::Debug for ExitHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitHandle")
            .field("reader", &self.reader_name())
            .field("closed", &self.is_closed())
            .finish()
    }
}
