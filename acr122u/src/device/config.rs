// acr122u/src/device/config.rs

use std::fmt;

use log::trace;
use tokio::sync::mpsc::UnboundedSender;

use crate::constants::DEFAULT_RESPONSE_LEN;
use crate::device::events::*;
use crate::types::{Disposition, ShareMode};

type Handler<E> = Box<dyn Fn(E) + Send + Sync>;

/// Handlers and settings for `prepare_reader`.
///
/// Handlers run on the reader's task; anything long-running (transmits
/// included) should be spawned or sent elsewhere. With `with_channel` every
/// event is also forwarded as a `LifecycleEvent`.
///
/// ```
/// use acr122u::device::ReaderConfig;
///
/// let config = ReaderConfig::new()
///     .with_debug_mode(true)
///     .on_connect(|event| println!("card on {}", event.reader))
///     .on_end(|event| println!("{} gone", event.reader));
/// assert!(config.debug_mode);
/// ```
pub struct ReaderConfig {
    on_connect: Option<Handler<ConnectEvent>>,
    on_connect_error: Option<Handler<ConnectErrorEvent>>,
    on_card_removed: Option<Handler<CardRemovedEvent>>,
    on_card_removed_error: Option<Handler<CardRemovedErrorEvent>>,
    on_end: Option<Handler<EndEvent>>,
    on_pcsc_error: Option<Handler<TransportErrorEvent>>,
    channel: Option<UnboundedSender<LifecycleEvent>>,
    pub debug_mode: bool,
    pub share_mode: ShareMode,
    /// Disposition used when a removed card is released.
    pub removal_disposition: Disposition,
    pub default_response_len: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            on_connect: None,
            on_connect_error: None,
            on_card_removed: None,
            on_card_removed_error: None,
            on_end: None,
            on_pcsc_error: None,
            channel: None,
            debug_mode: false,
            share_mode: ShareMode::Shared,
            removal_disposition: Disposition::Leave,
            default_response_len: DEFAULT_RESPONSE_LEN,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_connect(mut self, f: impl Fn(ConnectEvent) + Send + Sync + 'static) -> Self {
        self.on_connect = Some(Box::new(f));
        self
    }

    pub fn on_connect_error(
        mut self,
        f: impl Fn(ConnectErrorEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_connect_error = Some(Box::new(f));
        self
    }

    pub fn on_card_removed(
        mut self,
        f: impl Fn(CardRemovedEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_card_removed = Some(Box::new(f));
        self
    }

    pub fn on_card_removed_error(
        mut self,
        f: impl Fn(CardRemovedErrorEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_card_removed_error = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl Fn(EndEvent) + Send + Sync + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Handler for transport errors, reader-level ones included.
    pub fn on_pcsc_error(
        mut self,
        f: impl Fn(TransportErrorEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_pcsc_error = Some(Box::new(f));
        self
    }

    /// Forward every event to `sender`.
    pub fn with_channel(mut self, sender: UnboundedSender<LifecycleEvent>) -> Self {
        self.channel = Some(sender);
        self
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn with_share_mode(mut self, share_mode: ShareMode) -> Self {
        self.share_mode = share_mode;
        self
    }

    pub fn with_removal_disposition(mut self, disposition: Disposition) -> Self {
        self.removal_disposition = disposition;
        self
    }

    pub fn with_default_response_len(mut self, len: usize) -> Self {
        self.default_response_len = len;
        self
    }

    /// Deliver `event` to the channel (if any) and the matching handler.
    pub(crate) fn emit(&self, event: LifecycleEvent) {
        if let Some(tx) = &self.channel {
            if tx.send(event.clone()).is_err() {
                trace!("event receiver dropped, {} not forwarded", event.kind());
            }
        }
        match event {
            LifecycleEvent::Connect(e) => call(&self.on_connect, e),
            LifecycleEvent::ConnectError(e) => call(&self.on_connect_error, e),
            LifecycleEvent::CardRemoved(e) => call(&self.on_card_removed, e),
            LifecycleEvent::CardRemovedError(e) => call(&self.on_card_removed_error, e),
            LifecycleEvent::End(e) => call(&self.on_end, e),
            LifecycleEvent::TransportError(e) => call(&self.on_pcsc_error, e),
        }
    }
}

fn call<E>(handler: &Option<Handler<E>>, event: E) {
    if let Some(h) = handler {
        h(event);
    }
}

impl fmt::Debug for ReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderConfig")
            .field("debug_mode", &self.debug_mode)
            .field("share_mode", &self.share_mode)
            .field("removal_disposition", &self.removal_disposition)
            .field("default_response_len", &self.default_response_len)
            .field("channel", &self.channel.is_some())
            .finish_non_exhaustive()
    }
}
