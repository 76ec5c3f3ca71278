// acr122u/src/card/uid.rs
//! Block check characters of double-size (7 byte) UIDs.
//!
//! On MIFARE Ultralight / NTAG the UID is stored across pages 0..2 together
//! with two check bytes: BCC0 at page 0 byte 3 and BCC1 at page 2 byte 0.

use crate::constants::UID_CASCADE_TAG;
use crate::protocol::compute_check_digit;
use crate::types::Uid;
use crate::{Error, Result};

/// Length of a double-size UID.
pub const DOUBLE_SIZE_UID_LEN: usize = 7;

impl Uid {
    /// BCC0 = CT ^ UID0 ^ UID1 ^ UID2.
    pub fn bcc0(&self) -> Result<u8> {
        let bytes = self.double_size()?;
        Ok(compute_check_digit(&bytes[..3], UID_CASCADE_TAG))
    }

    /// BCC1 = UID3 ^ UID4 ^ UID5 ^ UID6.
    pub fn bcc1(&self) -> Result<u8> {
        let bytes = self.double_size()?;
        Ok(compute_check_digit(&bytes[3..7], 0x00))
    }

    /// Check the stored check bytes read back from pages 0 and 2.
    pub fn verify_bcc(&self, bcc0: u8, bcc1: u8) -> Result<bool> {
        Ok(self.bcc0()? == bcc0 && self.bcc1()? == bcc1)
    }

    fn double_size(&self) -> Result<&[u8]> {
        if self.len() != DOUBLE_SIZE_UID_LEN {
            return Err(Error::InvalidLength {
                expected: DOUBLE_SIZE_UID_LEN,
                actual: self.len(),
            });
        }
        Ok(self.as_bytes())
    }
}
