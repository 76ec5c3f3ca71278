// acr122u/src/device/events.rs

use crate::Error;
use crate::device::{Connection, ExitHandle};
use crate::protocol::AtrInfo;
use crate::types::{Protocol, StatusBits};

/// A card was inserted and connected.
#[derive(Debug, Clone)]
pub struct ConnectEvent {
    pub reader: String,
    pub status: StatusBits,
    pub info: AtrInfo,
    pub protocol: Protocol,
    pub connection: Connection,
    pub exit: ExitHandle,
}

/// A card was inserted but the connection attempt failed.
#[derive(Debug, Clone)]
pub struct ConnectErrorEvent {
    pub reader: String,
    pub error: Error,
    pub status: StatusBits,
    pub info: AtrInfo,
    pub exit: ExitHandle,
}

#[derive(Debug, Clone)]
pub struct CardRemovedEvent {
    pub reader: String,
    pub status: StatusBits,
    pub info: AtrInfo,
    pub exit: ExitHandle,
}

/// The card was removed and releasing it failed. The reader is idle anyway.
#[derive(Debug, Clone)]
pub struct CardRemovedErrorEvent {
    pub reader: String,
    pub error: Error,
    pub status: StatusBits,
    pub info: AtrInfo,
    pub exit: ExitHandle,
}

#[derive(Debug, Clone)]
pub struct EndEvent {
    pub reader: String,
}

/// Transport-level error; `reader` is set when a reader reported it.
#[derive(Debug, Clone)]
pub struct TransportErrorEvent {
    pub reader: Option<String>,
    pub error: Error,
}

/// Every event the lifecycle produces, as sent over a channel.
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    Connect(ConnectEvent),
    ConnectError(ConnectErrorEvent),
    CardRemoved(CardRemovedEvent),
    CardRemovedError(CardRemovedErrorEvent),
    End(EndEvent),
    TransportError(TransportErrorEvent),
}

impl LifecycleEvent {
    /// Reader the event belongs to, if any.
    pub fn reader(&self) -> Option<&str> {
        match self {
            Self::Connect(e) => Some(&e.reader),
            Self::ConnectError(e) => Some(&e.reader),
            Self::CardRemoved(e) => Some(&e.reader),
            Self::CardRemovedError(e) => Some(&e.reader),
            Self::End(e) => Some(&e.reader),
            Self::TransportError(e) => e.reader.as_deref(),
        }
    }

    /// Short kind name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connect(_) => "connect",
            Self::ConnectError(_) => "connect-error",
            Self::CardRemoved(_) => "card-removed",
            Self::CardRemovedError(_) => "card-removed-error",
            Self::End(_) => "end",
            Self::TransportError(_) => "transport-error",
        }
    }
}
