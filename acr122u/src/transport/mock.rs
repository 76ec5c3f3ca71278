// acr122u/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::transport::traits::{
    DiscoveredReader, ReaderEvent, ReaderStatus, ReaderTransport, Transport, TransportEvent,
};
use crate::types::{Disposition, Protocol, ShareMode, StatusBits};
use crate::{Error, Result};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory transport for tests and demos. Readers are attached with
/// `add_reader` and driven through the returned `MockReader`.
#[derive(Debug, Clone)]
pub struct MockTransport {
    inner: Arc<TransportState>,
}

#[derive(Debug)]
struct TransportState {
    events: Mutex<Option<UnboundedSender<TransportEvent>>>,
    receiver: Mutex<Option<UnboundedReceiver<TransportEvent>>>,
    readers: Mutex<Vec<MockReader>>,
    close_calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            inner: Arc::new(TransportState {
                events: Mutex::new(Some(tx)),
                receiver: Mutex::new(Some(rx)),
                readers: Mutex::new(Vec::new()),
                close_calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Attach a reader and announce it on the watch stream.
    pub fn add_reader(&self, name: &str) -> MockReader {
        let (tx, rx) = mpsc::unbounded_channel();
        let reader = MockReader::new(name, tx);
        lock(&self.inner.readers).push(reader.clone());
        self.send(TransportEvent::ReaderAdded(DiscoveredReader::new(
            Arc::new(reader.clone()),
            rx,
        )));
        reader
    }

    /// Look up a previously attached reader by name.
    pub fn reader(&self, name: &str) -> Result<MockReader> {
        lock(&self.inner.readers)
            .iter()
            .find(|r| r.name() == name)
            .cloned()
            .ok_or_else(|| Error::ReaderNotFound(name.to_string()))
    }

    /// Report a transport-level error not tied to a reader.
    pub fn error(&self, error: Error) {
        self.send(TransportEvent::Error(error));
    }

    pub fn close_calls(&self) -> usize {
        self.inner.close_calls.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.close_calls() > 0
    }

    fn send(&self, event: TransportEvent) {
        if let Some(tx) = lock(&self.inner.events).as_ref() {
            // The receiver may be gone once the transport is no longer watched.
            let _ = tx.send(event);
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn watch(&self) -> Result<UnboundedReceiver<TransportEvent>> {
        if self.is_closed() {
            return Err(Error::TransportClosed);
        }
        lock(&self.inner.receiver).take().ok_or_else(|| {
            Error::UnsupportedOperation("transport is already being watched".to_string())
        })
    }

    async fn close(&self) -> Result<()> {
        self.inner.close_calls.fetch_add(1, Ordering::SeqCst);
        // Dropping the sender ends the watch stream.
        lock(&self.inner.events).take();
        Ok(())
    }
}

/// Everything a `MockReader` has been asked to do, plus its scripted
/// behaviour.
#[derive(Debug)]
pub struct ReaderLog {
    pub sent: Vec<Vec<u8>>,
    pub controls: Vec<(Vec<u8>, u32)>,
    pub responses: VecDeque<Vec<u8>>,
    pub connects: Vec<ShareMode>,
    pub disconnects: Vec<Disposition>,
    /// Testing hook: number of connect calls that should fail.
    pub connect_failures: usize,
    /// Testing hook: number of disconnect calls that should fail.
    pub disconnect_failures: usize,
    pub close_calls: usize,
    pub connected: bool,
    pub protocol: Protocol,
}

impl Default for ReaderLog {
    fn default() -> Self {
        Self {
            sent: Vec::new(),
            controls: Vec::new(),
            responses: VecDeque::new(),
            connects: Vec::new(),
            disconnects: Vec::new(),
            connect_failures: 0,
            disconnect_failures: 0,
            close_calls: 0,
            connected: false,
            protocol: Protocol::T1,
        }
    }
}

/// Mock reader. Clones share the same log and event stream.
#[derive(Debug, Clone)]
pub struct MockReader {
    name: Arc<str>,
    log: Arc<Mutex<ReaderLog>>,
    events: Arc<Mutex<Option<UnboundedSender<ReaderEvent>>>>,
}

impl MockReader {
    fn new(name: &str, events: UnboundedSender<ReaderEvent>) -> Self {
        Self {
            name: Arc::from(name),
            log: Arc::new(Mutex::new(ReaderLog::default())),
            events: Arc::new(Mutex::new(Some(events))),
        }
    }

    /// Deliver a status notification.
    pub fn push_status(&self, state: StatusBits, atr: &[u8]) {
        self.emit(ReaderEvent::Status(ReaderStatus::new(state, atr)));
    }

    /// Report a reader-level error.
    pub fn error(&self, error: Error) {
        self.emit(ReaderEvent::Error(error));
    }

    /// Detach the reader: deliver `Ended` and close its stream.
    pub fn end(&self) {
        if let Some(tx) = lock(&self.events).take() {
            let _ = tx.send(ReaderEvent::Ended);
        }
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        lock(&self.log).responses.push_back(resp);
    }

    pub fn set_connect_failures(&self, n: usize) {
        lock(&self.log).connect_failures = n;
    }

    pub fn set_disconnect_failures(&self, n: usize) {
        lock(&self.log).disconnect_failures = n;
    }

    pub fn set_protocol(&self, protocol: Protocol) {
        lock(&self.log).protocol = protocol;
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        lock(&self.log).sent.clone()
    }

    pub fn controls(&self) -> Vec<(Vec<u8>, u32)> {
        lock(&self.log).controls.clone()
    }

    pub fn connects(&self) -> Vec<ShareMode> {
        lock(&self.log).connects.clone()
    }

    pub fn disconnects(&self) -> Vec<Disposition> {
        lock(&self.log).disconnects.clone()
    }

    pub fn close_calls(&self) -> usize {
        lock(&self.log).close_calls
    }

    pub fn is_connected(&self) -> bool {
        lock(&self.log).connected
    }

    fn emit(&self, event: ReaderEvent) {
        if let Some(tx) = lock(&self.events).as_ref() {
            let _ = tx.send(event);
        }
    }

    fn next_response(log: &mut ReaderLog) -> Result<Vec<u8>> {
        log.responses.pop_front().ok_or(Error::Timeout)
    }
}

#[async_trait]
impl ReaderTransport for MockReader {
    fn name(&self) -> &str {
        &self.name
    }

    async fn connect(&self, mode: ShareMode) -> Result<Protocol> {
        let mut log = lock(&self.log);
        log.connects.push(mode);
        if log.connect_failures > 0 {
            log.connect_failures -= 1;
            return Err(Error::transport("SCardConnect failed"));
        }
        log.connected = true;
        Ok(log.protocol)
    }

    async fn disconnect(&self, disposition: Disposition) -> Result<()> {
        let mut log = lock(&self.log);
        log.disconnects.push(disposition);
        log.connected = false;
        if log.disconnect_failures > 0 {
            log.disconnect_failures -= 1;
            return Err(Error::transport("SCardDisconnect failed"));
        }
        Ok(())
    }

    async fn transmit(
        &self,
        command: &[u8],
        _response_len: usize,
        _protocol: Protocol,
    ) -> Result<Vec<u8>> {
        let mut log = lock(&self.log);
        if !log.connected {
            return Err(Error::transport("SCardTransmit: card removed"));
        }
        log.sent.push(command.to_vec());
        Self::next_response(&mut log)
    }

    async fn control(
        &self,
        command: &[u8],
        control_code: u32,
        _response_len: usize,
    ) -> Result<Vec<u8>> {
        let mut log = lock(&self.log);
        log.controls.push((command.to_vec(), control_code));
        Self::next_response(&mut log)
    }

    async fn close(&self) -> Result<()> {
        lock(&self.log).close_calls += 1;
        lock(&self.log).connected = false;
        self.end();
        Ok(())
    }
}
