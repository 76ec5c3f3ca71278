// acr122u/src/protocol/atr.rs

use crate::card::CardType;
use crate::constants::{ATR_HISTORICAL_BYTES_BASE, ATR_INITIAL_HEADER, ATR_PART3_MARKER};
use crate::protocol::checksum::check_digit;
use crate::protocol::parser::{byte_at_signed, clamped};
use crate::types::StatusBits;

/// Integrity problem found while parsing an ATR. Problems are data: the
/// parse always completes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Problem {
    /// TS is not the direct-convention byte 0x3B.
    BadInitialHeader { got: u8 },
    /// TCK does not match; `got` is `None` when the ATR ends before it.
    BadCheckDigit { got: Option<u8>, expected: u8 },
    /// T0 declares more (or fewer than zero) historical bytes than the
    /// buffer holds. Slices are clamped in that case.
    HistoricalBytesOutOfRange { declared: i16, available: usize },
}

/// Fields of a PC/SC part 3 (storage card) historical byte block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Part3Info {
    /// Registered application provider identifier (5 bytes).
    pub rid: Vec<u8>,
    /// Card standard byte.
    pub ss: Vec<u8>,
    pub card_type: CardType,
    pub rfu: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AtrProtocol {
    Iso14443Part3(Part3Info),
    NotFullyParsed,
}

/// Everything derived from an ATR of at least two bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AtrDetails {
    pub initial_header: u8,
    /// T0 (format byte).
    pub t0: u8,
    pub td1: Option<u8>,
    pub td2: Option<u8>,
    /// `T0 - 0x80`; negative when T0 is malformed.
    pub num_historical_bytes: i16,
    pub historical_bytes: Vec<u8>,
    pub check_digit: Option<u8>,
    pub expected_check_digit: u8,
    pub protocol: AtrProtocol,
    pub problems: Vec<Problem>,
}

/// Parsed reader status: the raw state bits plus whatever the ATR yields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AtrInfo {
    pub state: StatusBits,
    pub atr: Vec<u8>,
    /// `None` when the ATR is shorter than two bytes.
    pub details: Option<AtrDetails>,
}

impl AtrInfo {
    /// Parse the ATR reported together with `state`.
    pub fn parse(state: StatusBits, atr: &[u8]) -> Self {
        Self {
            state,
            atr: atr.to_vec(),
            details: parse_details(atr),
        }
    }

    pub fn card_type(&self) -> Option<&CardType> {
        match &self.details.as_ref()?.protocol {
            AtrProtocol::Iso14443Part3(part3) => Some(&part3.card_type),
            AtrProtocol::NotFullyParsed => None,
        }
    }

    pub fn problems(&self) -> &[Problem] {
        self.details
            .as_ref()
            .map(|d| d.problems.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_problems(&self) -> bool {
        !self.problems().is_empty()
    }
}

fn parse_details(atr: &[u8]) -> Option<AtrDetails> {
    let (&initial_header, rest) = atr.split_first()?;
    let &t0 = rest.first()?;

    let nhb = t0 as i16 - ATR_HISTORICAL_BYTES_BASE as i16;
    let n = nhb as isize;

    let historical_bytes = clamped(atr, 4, 4 + n).to_vec();
    let check_digit_value = byte_at_signed(atr, 4 + n);
    let expected_check_digit = check_digit(clamped(atr, 1, 3 + n));

    let protocol = if clamped(atr, 4, 6) == ATR_PART3_MARKER {
        AtrProtocol::Iso14443Part3(Part3Info {
            rid: clamped(atr, 7, 12).to_vec(),
            ss: clamped(atr, 12, 13).to_vec(),
            card_type: CardType::lookup(clamped(atr, 13, 15)),
            rfu: clamped(atr, 15, 19).to_vec(),
        })
    } else {
        AtrProtocol::NotFullyParsed
    };

    let mut problems = Vec::new();
    if initial_header != ATR_INITIAL_HEADER {
        problems.push(Problem::BadInitialHeader {
            got: initial_header,
        });
    }
    if nhb < 0 || historical_bytes.len() != nhb as usize {
        problems.push(Problem::HistoricalBytesOutOfRange {
            declared: nhb,
            available: atr.len().saturating_sub(4),
        });
    }
    if check_digit_value != Some(expected_check_digit) {
        problems.push(Problem::BadCheckDigit {
            got: check_digit_value,
            expected: expected_check_digit,
        });
    }

    Some(AtrDetails {
        initial_header,
        t0,
        td1: atr.get(2).copied(),
        td2: atr.get(3).copied(),
        num_historical_bytes: nhb,
        historical_bytes,
        check_digit: check_digit_value,
        expected_check_digit,
        protocol,
        problems,
    })
}
