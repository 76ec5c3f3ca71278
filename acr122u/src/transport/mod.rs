// acr122u/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MockReader, MockTransport};
pub use traits::{
    DiscoveredReader, ReaderEvent, ReaderStatus, ReaderTransport, Transport, TransportEvent,
};
