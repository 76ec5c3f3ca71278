//! Small helpers shared across the crate: hex rendering for logs and the
//! explicit pause used between card operations.

pub mod hex;
pub mod pause;

pub use hex::*;
pub use pause::*;
