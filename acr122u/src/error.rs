// acr122u/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
///
/// ATR anomalies and card status words are reported as data
/// (`protocol::atr::Problem`, `protocol::ResponseOutcome`); only transport
/// failures and malformed caller buffers surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("reader not found: {0}")]
    ReaderNotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("card is not connected")]
    NotConnected,

    #[error("transport already closed")]
    TransportClosed,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("card returned status=({sw1:#04x}, {sw2:#04x})")]
    CardStatus { sw1: u8, sw2: u8 },

    #[error("operation timed out")]
    Timeout,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Shorthand for wrapping a collaborator failure message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// True for failures that originate in the transport rather than in
    /// caller-provided data.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::NotConnected | Self::TransportClosed | Self::Timeout
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
