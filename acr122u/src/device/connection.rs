// acr122u/src/device/connection.rs

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use log::debug;

use crate::constants::{ESCAPE_CONTROL_CODE, UNNAMED_OPERATION};
use crate::protocol::{Command, classify};
use crate::transport::ReaderTransport;
use crate::types::Protocol;
use crate::utils::to_hex;
use crate::{Error, Result};

static NEXT_OPERATION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide, monotonically increasing id used to correlate log lines.
pub fn next_operation_id() -> u64 {
    NEXT_OPERATION_ID.fetch_add(1, Ordering::Relaxed)
}

/// A command sent to the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmit {
    pub command: Vec<u8>,
    pub name: String,
    /// Receive buffer size; the connection default when `None`.
    pub response_len: Option<usize>,
}

impl Transmit {
    pub fn new(command: impl Into<Vec<u8>>) -> Self {
        Self {
            command: command.into(),
            name: UNNAMED_OPERATION.to_string(),
            response_len: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_response_len(mut self, len: usize) -> Self {
        self.response_len = Some(len);
        self
    }
}

impl From<Vec<u8>> for Transmit {
    fn from(command: Vec<u8>) -> Self {
        Self::new(command)
    }
}

impl From<&[u8]> for Transmit {
    fn from(command: &[u8]) -> Self {
        Self::new(command)
    }
}

impl From<Command> for Transmit {
    fn from(command: Command) -> Self {
        Self::new(command.encode()).with_name(command.name())
    }
}

/// A command sent to the reader itself through a control code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub command: Vec<u8>,
    pub control_code: u32,
    pub name: String,
    pub response_len: Option<usize>,
}

impl Control {
    pub fn new(command: impl Into<Vec<u8>>, control_code: u32) -> Self {
        Self {
            command: command.into(),
            control_code,
            name: UNNAMED_OPERATION.to_string(),
            response_len: None,
        }
    }

    /// Pseudo-APDU through the CCID escape control code.
    pub fn escape(command: Command) -> Self {
        Self::new(command.encode(), ESCAPE_CONTROL_CODE).with_name(command.name())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_response_len(mut self, len: usize) -> Self {
        self.response_len = Some(len);
        self
    }
}

/// Transmit/control capability for one card-insert episode.
///
/// Clones share the same episode. Once the card is released or the reader
/// ends every call fails with `Error::NotConnected`; operations already in
/// flight complete or fail on their own.
#[derive(Clone)]
pub struct Connection {
    reader: Arc<dyn ReaderTransport>,
    protocol: Protocol,
    active: Arc<AtomicBool>,
    debug: bool,
    default_response_len: usize,
}

impl Connection {
    pub(crate) fn new(
        reader: Arc<dyn ReaderTransport>,
        protocol: Protocol,
        debug: bool,
        default_response_len: usize,
    ) -> Self {
        Self {
            reader,
            protocol,
            active: Arc::new(AtomicBool::new(true)),
            debug,
            default_response_len,
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn reader_name(&self) -> &str {
        self.reader.name()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub(crate) fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    fn ensure_active(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(Error::NotConnected)
        }
    }

    /// Send a command to the card and return the raw response, status word
    /// included.
    pub async fn transmit(&self, request: impl Into<Transmit>) -> Result<Vec<u8>> {
        let request = request.into();
        self.ensure_active()?;
        let id = next_operation_id();
        let len = request.response_len.unwrap_or(self.default_response_len);

        if self.debug {
            debug!(
                "[{}][{}] transmitting {}: {}",
                self.reader_name(),
                id,
                request.name,
                to_hex(&request.command)
            );
        }

        let result = self
            .reader
            .transmit(&request.command, len, self.protocol)
            .await;

        if self.debug {
            match &result {
                Ok(resp) => {
                    let meaning = classify(resp)
                        .ok()
                        .and_then(|o| o.meaning)
                        .unwrap_or("unknown status");
                    debug!(
                        "[{}][{}] response to {}: {} ({})",
                        self.reader_name(),
                        id,
                        request.name,
                        to_hex(resp),
                        meaning
                    );
                }
                Err(e) => debug!(
                    "[{}][{}] {} failed: {}",
                    self.reader_name(),
                    id,
                    request.name,
                    e
                ),
            }
        }
        result
    }

    /// Send a command to the reader through its control code.
    pub async fn control(&self, request: Control) -> Result<Vec<u8>> {
        self.ensure_active()?;
        let id = next_operation_id();
        let len = request.response_len.unwrap_or(self.default_response_len);

        if self.debug {
            debug!(
                "[{}][{}] control {} (code {:#010x}): {}",
                self.reader_name(),
                id,
                request.name,
                request.control_code,
                to_hex(&request.command)
            );
        }

        let result = self
            .reader
            .control(&request.command, request.control_code, len)
            .await;

        if self.debug {
            match &result {
                Ok(resp) => debug!(
                    "[{}][{}] control response to {}: {}",
                    self.reader_name(),
                    id,
                    request.name,
                    to_hex(resp)
                ),
                Err(e) => debug!(
                    "[{}][{}] control {} failed: {}",
                    self.reader_name(),
                    id,
                    request.name,
                    e
                ),
            }
        }
        result
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("reader", &self.reader_name())
            .field("protocol", &self.protocol)
            .field("active", &self.is_active())
            .finish()
    }
}
