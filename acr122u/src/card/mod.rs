// acr122u/src/card/mod.rs
//! Card-family knowledge: the ATR card name table and UID check characters.

mod known;
mod uid;

pub use known::{CardType, KNOWN_CARDS, KnownCard};
pub use uid::DOUBLE_SIZE_UID_LEN;
