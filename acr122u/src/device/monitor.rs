// acr122u/src/device/monitor.rs

use std::sync::Arc;

use log::{debug, error};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::{JoinHandle, JoinSet};

use crate::Result;
use crate::device::config::ReaderConfig;
use crate::device::events::{LifecycleEvent, TransportErrorEvent};
use crate::device::handle::TransportHandle;
use crate::device::worker::ReaderWorker;
use crate::transport::{Transport, TransportEvent};

/// Register `config` with `transport` and start watching readers.
///
/// Every discovered reader gets its own task; transport-level errors go to
/// `on_pcsc_error`. Must be called from within a tokio runtime.
pub async fn prepare_reader(
    transport: Arc<dyn Transport>,
    config: ReaderConfig,
) -> Result<ReaderMonitor> {
    let events = transport.watch().await?;
    let handle = TransportHandle::new(transport);
    let config = Arc::new(config);
    let task = tokio::spawn(discover(events, config, handle.clone()));
    Ok(ReaderMonitor { handle, task })
}

async fn discover(
    mut events: UnboundedReceiver<TransportEvent>,
    config: Arc<ReaderConfig>,
    transport: TransportHandle,
) {
    let mut readers = JoinSet::new();
    while let Some(event) = events.recv().await {
        match event {
            TransportEvent::ReaderAdded(discovered) => {
                if config.debug_mode {
                    debug!("reader detected: {}", discovered.reader.name());
                }
                let worker = ReaderWorker::new(discovered, config.clone(), transport.clone());
                readers.spawn(worker.run());
            }
            TransportEvent::Error(error) => {
                error!("transport error: {}", error);
                config.emit(LifecycleEvent::TransportError(TransportErrorEvent {
                    reader: None,
                    error,
                }));
            }
        }
    }
    if config.debug_mode {
        debug!("transport stream closed, waiting for {} reader(s)", readers.len());
    }
    while let Some(joined) = readers.join_next().await {
        if let Err(e) = joined {
            error!("reader task failed: {}", e);
        }
    }
}

/// Running registration returned by `prepare_reader`.
#[derive(Debug)]
pub struct ReaderMonitor {
    handle: TransportHandle,
    task: JoinHandle<()>,
}

impl ReaderMonitor {
    /// Shared transport handle; closing it ends discovery.
    pub fn transport(&self) -> &TransportHandle {
        &self.handle
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait until the transport stream and every reader task have ended.
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            error!("discovery task failed: {}", e);
        }
    }
}
