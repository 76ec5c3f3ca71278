// acr122u/src/protocol/parser.rs
//! Bounds-aware slicing helpers.
//!
//! Command encoders use the checked variants; the ATR parser uses the
//! clamped ones because a malformed ATR must still yield a best-effort record.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return `data[start..end)` clamped to the available bytes.
///
/// Negative or inverted ranges yield an empty slice.
pub fn clamped(data: &[u8], start: isize, end: isize) -> &[u8] {
    let len = data.len() as isize;
    let s = start.clamp(0, len) as usize;
    let e = end.clamp(0, len) as usize;
    if s >= e { &[] } else { &data[s..e] }
}

/// Byte at a signed offset, or `None` when out of range.
pub fn byte_at_signed(data: &[u8], idx: isize) -> Option<u8> {
    usize::try_from(idx).ok().and_then(|i| data.get(i).copied())
}
