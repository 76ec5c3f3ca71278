// acr122u/src/protocol/checksum.rs

/// Running XOR of `init` with every byte of `bytes`.
///
/// Used for the ATR check digit (TCK) and for the block check characters of
/// double-size UIDs.
pub fn compute_check_digit(bytes: &[u8], init: u8) -> u8 {
    bytes.iter().fold(init, |acc, &b| acc ^ b)
}

/// `compute_check_digit` with a zero seed.
pub fn check_digit(bytes: &[u8]) -> u8 {
    compute_check_digit(bytes, 0x00)
}
