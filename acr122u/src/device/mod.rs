// acr122u/src/device/mod.rs

pub mod config;
pub mod connection;
pub mod events;
pub mod handle;
pub mod lifecycle;
pub mod monitor;
mod worker;

pub use config::ReaderConfig;
pub use connection::{Connection, Control, Transmit, next_operation_id};
pub use events::*;
pub use handle::{ExitHandle, TransportHandle};
pub use lifecycle::{Action, Lifecycle, ReaderState};
pub use monitor::{ReaderMonitor, prepare_reader};
