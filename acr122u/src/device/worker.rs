// acr122u/src/device/worker.rs

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::device::config::ReaderConfig;
use crate::device::connection::Connection;
use crate::device::events::*;
use crate::device::handle::{ExitHandle, TransportHandle};
use crate::device::lifecycle::{Action, Lifecycle};
use crate::protocol::AtrInfo;
use crate::transport::{DiscoveredReader, ReaderEvent, ReaderStatus, ReaderTransport};

/// Drives one reader: consumes its events in order and performs the
/// connect/disconnect calls the lifecycle asks for.
pub(crate) struct ReaderWorker {
    reader: Arc<dyn ReaderTransport>,
    name: String,
    events: UnboundedReceiver<ReaderEvent>,
    config: Arc<ReaderConfig>,
    lifecycle: Lifecycle,
    exit: ExitHandle,
    connection: Option<Connection>,
}

impl ReaderWorker {
    pub(crate) fn new(
        discovered: DiscoveredReader,
        config: Arc<ReaderConfig>,
        transport: TransportHandle,
    ) -> Self {
        let DiscoveredReader { reader, events } = discovered;
        let name = reader.name().to_string();
        let exit = ExitHandle::new(reader.clone(), transport);
        Self {
            reader,
            name,
            events,
            config,
            lifecycle: Lifecycle::new(),
            exit,
            connection: None,
        }
    }

    pub(crate) async fn run(mut self) {
        if self.config.debug_mode {
            debug!("[{}] reader attached", self.name);
        }
        while let Some(event) = self.events.recv().await {
            match event {
                ReaderEvent::Status(status) => self.handle_status(status).await,
                ReaderEvent::Error(error) => {
                    error!("[{}] reader error: {}", self.name, error);
                    self.config
                        .emit(LifecycleEvent::TransportError(TransportErrorEvent {
                            reader: Some(self.name.clone()),
                            error,
                        }));
                }
                ReaderEvent::Ended => break,
            }
        }
        self.finish();
    }

    async fn handle_status(&mut self, status: ReaderStatus) {
        let previous = self.lifecycle.previous_status();
        let action = self.lifecycle.on_status(status.state);
        if self.config.debug_mode {
            debug!(
                "[{}] status {:#06x} -> {:#06x}, state {:?}, action {:?}",
                self.name,
                previous.bits(),
                status.state.bits(),
                self.lifecycle.state(),
                action
            );
        }
        let info = AtrInfo::parse(status.state, &status.atr);
        match action {
            Some(Action::Connect) => self.connect(info).await,
            Some(Action::Disconnect) => self.disconnect(info).await,
            Some(Action::ReportRemoved) => {
                self.config
                    .emit(LifecycleEvent::CardRemoved(CardRemovedEvent {
                        reader: self.name.clone(),
                        status: info.state,
                        info,
                        exit: self.exit.clone(),
                    }))
            }
            None => {}
        }
    }

    async fn connect(&mut self, info: AtrInfo) {
        if info.has_problems() {
            warn!("[{}] ATR problems: {:?}", self.name, info.problems());
        }
        match self.reader.connect(self.config.share_mode).await {
            Ok(protocol) => {
                self.lifecycle.connect_succeeded();
                info!("[{}] card connected ({})", self.name, protocol);
                let connection = Connection::new(
                    self.reader.clone(),
                    protocol,
                    self.config.debug_mode,
                    self.config.default_response_len,
                );
                self.connection = Some(connection.clone());
                self.config.emit(LifecycleEvent::Connect(ConnectEvent {
                    reader: self.name.clone(),
                    status: info.state,
                    info,
                    protocol,
                    connection,
                    exit: self.exit.clone(),
                }));
            }
            Err(error) => {
                self.lifecycle.connect_failed();
                warn!("[{}] connect failed: {}", self.name, error);
                self.config
                    .emit(LifecycleEvent::ConnectError(ConnectErrorEvent {
                        reader: self.name.clone(),
                        error,
                        status: info.state,
                        info,
                        exit: self.exit.clone(),
                    }));
            }
        }
    }

    async fn disconnect(&mut self, info: AtrInfo) {
        self.release_connection();
        let result = self
            .reader
            .disconnect(self.config.removal_disposition)
            .await;
        self.lifecycle.disconnect_finished();
        match result {
            Ok(()) => {
                info!("[{}] card removed", self.name);
                self.config
                    .emit(LifecycleEvent::CardRemoved(CardRemovedEvent {
                        reader: self.name.clone(),
                        status: info.state,
                        info,
                        exit: self.exit.clone(),
                    }));
            }
            Err(error) => {
                warn!("[{}] disconnect failed: {}", self.name, error);
                self.config
                    .emit(LifecycleEvent::CardRemovedError(CardRemovedErrorEvent {
                        reader: self.name.clone(),
                        error,
                        status: info.state,
                        info,
                        exit: self.exit.clone(),
                    }));
            }
        }
    }

    fn release_connection(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.deactivate();
        }
    }

    fn finish(&mut self) {
        self.release_connection();
        self.lifecycle.end();
        info!("[{}] reader removed", self.name);
        self.config.emit(LifecycleEvent::End(EndEvent {
            reader: self.name.clone(),
        }));
    }
}
