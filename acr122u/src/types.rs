// acr122u/src/types.rs

use crate::Error;
use std::fmt;

/// Reader state bitmask as reported by PC/SC status notifications.
///
/// Only `PRESENT` and `EMPTY` drive the lifecycle; the remaining bits are
/// carried through for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusBits(u32);

impl StatusBits {
    pub const UNAWARE: Self = Self(0x0000);
    pub const IGNORE: Self = Self(0x0001);
    pub const CHANGED: Self = Self(0x0002);
    pub const UNKNOWN: Self = Self(0x0004);
    pub const UNAVAILABLE: Self = Self(0x0008);
    pub const EMPTY: Self = Self(0x0010);
    pub const PRESENT: Self = Self(0x0020);
    pub const ATRMATCH: Self = Self(0x0040);
    pub const EXCLUSIVE: Self = Self(0x0080);
    pub const INUSE: Self = Self(0x0100);
    pub const MUTE: Self = Self(0x0200);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// Bits that differ from `previous` and are set in `self`.
    pub fn newly_set(&self, previous: Self) -> Self {
        Self((previous.0 ^ self.0) & self.0)
    }
}

impl std::ops::BitOr for StatusBits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Trailing two-byte status word of a response (SW1 SW2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusWord([u8; 2]);

impl StatusWord {
    pub const SUCCESS: Self = Self([0x90, 0x00]);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self([sw1, sw2])
    }

    pub fn sw1(&self) -> u8 {
        self.0[0]
    }

    pub fn sw2(&self) -> u8 {
        self.0[1]
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Split the status word off the end of a response buffer.
    pub fn from_response(response: &[u8]) -> crate::Result<Self> {
        let tail = response
            .len()
            .checked_sub(2)
            .map(|start| &response[start..])
            .ok_or(Error::InvalidLength {
                expected: 2,
                actual: response.len(),
            })?;
        Self::try_from(tail)
    }
}

impl TryFrom<&[u8]> for StatusWord {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes {
            [sw1, sw2] => Ok(Self([*sw1, *sw2])),
            _ => Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            }),
        }
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.0[0], self.0[1])
    }
}

/// Card UID as returned by the get-UID pseudo-APDU (4, 7 or 10 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::to_hex(&self.0)
    }
}

/// Connection share mode requested from the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareMode {
    Exclusive,
    #[default]
    Shared,
    Direct,
}

/// What the reader does with the card after disconnecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    #[default]
    Leave,
    Reset,
    Unpower,
    Eject,
}

/// Transmission protocol negotiated on connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Protocol {
    #[display(fmt = "T=0")]
    T0,
    #[display(fmt = "T=1")]
    T1,
    #[display(fmt = "RAW")]
    Raw,
}

/// MIFARE Classic authentication key type.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    A = 0x60,
    B = 0x61,
}

/// Value block operation code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOp {
    Store = 0x00,
    Increment = 0x01,
    Decrement = 0x02,
}

/// Link between the LED blink phases and the buzzer.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuzzerLink {
    #[default]
    Off = 0x00,
    DuringT1 = 0x01,
    DuringT2 = 0x02,
    Both = 0x03,
}
