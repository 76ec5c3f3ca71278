// acr122u/src/lib.rs

//! acr122u
//!
//! Card lifecycle, ATR parsing and pseudo-APDU framing for ACR122U-style
//! PC/SC contactless readers. The PC/SC service itself is reached through
//! the `transport` traits.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are available everywhere.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
