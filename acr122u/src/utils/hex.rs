//! Hex helpers for logs and test fixtures.

use std::fmt::Write;

/// Upper-case hex with one space between bytes: `&[0xff, 0xca]` -> `"FF CA"`.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse hex digits into bytes, skipping every non-hex character.
///
/// `"FF CA 00 00 00"`, `"ff:ca:00:00:00"` and `"ffca000000"` all parse to
/// the same buffer. An odd number of digits is an error.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!("hex string has an odd number of digits ({})", digits.len()));
    }

    Ok(digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}
