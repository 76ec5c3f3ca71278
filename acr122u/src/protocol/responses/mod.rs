// acr122u/src/protocol/responses/mod.rs

pub mod reader;
pub mod status;

pub use reader::{PiccOperatingParameter, decode_firmware_version};
pub use status::{
    OutcomeKind, ResponseOutcome, STATUS_CATALOG, StatusEntry, classify, expect_payload,
    unwrap_payload,
};
