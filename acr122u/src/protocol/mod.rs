// acr122u/src/protocol/mod.rs
//! Pure encoders and decoders; nothing in here performs I/O.

pub mod atr;
pub mod checksum;
pub mod commands;
pub mod parser;
pub mod responses;

pub use atr::{AtrDetails, AtrInfo, AtrProtocol, Part3Info, Problem};
pub use checksum::{check_digit, compute_check_digit};
pub use commands::Command;
pub use responses::*;
