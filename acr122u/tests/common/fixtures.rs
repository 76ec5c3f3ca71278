// fixtures.rs: commonly used ATRs, UIDs and responses

pub use acr122u::test_support::{CARD_ABSENT, CARD_PRESENT, CLASSIC_1K_ATR};

pub fn classic_1k_atr() -> Vec<u8> {
    hex::decode("3B8F8001804F0CA000000306030001000000006A").unwrap()
}

pub fn ultralight_atr() -> Vec<u8> {
    hex::decode("3B8F8001804F0CA0000003060300030000000068").unwrap()
}

/// Double size UID of a MIFARE Ultralight.
pub fn sample_uid() -> Vec<u8> {
    hex::decode("044B77521E4E81").unwrap()
}

pub fn uid_response() -> Vec<u8> {
    let mut r = sample_uid();
    r.extend_from_slice(&[0x90, 0x00]);
    r
}

pub fn block_response(fill: u8) -> Vec<u8> {
    let mut r = vec![fill; 16];
    r.extend_from_slice(&[0x90, 0x00]);
    r
}
