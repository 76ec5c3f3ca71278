// acr122u/src/protocol/responses/status.rs

use crate::types::StatusWord;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OutcomeKind {
    Success,
    KnownError,
    UnknownError,
}

/// Catalog entry: a status word with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub status: StatusWord,
    pub kind: OutcomeKind,
    pub meaning: &'static str,
}

/// Ordered status catalog; the first exact match wins.
pub const STATUS_CATALOG: &[StatusEntry] = &[
    StatusEntry {
        status: StatusWord::new(0x90, 0x00),
        kind: OutcomeKind::Success,
        meaning: "The operations completed successfully.",
    },
    StatusEntry {
        status: StatusWord::new(0x63, 0x00),
        kind: OutcomeKind::KnownError,
        meaning: "The operation failed.",
    },
    StatusEntry {
        status: StatusWord::new(0x6A, 0x81),
        kind: OutcomeKind::KnownError,
        meaning: "Function not supported.",
    },
];

/// Classification of a response's trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResponseOutcome {
    pub kind: OutcomeKind,
    pub meaning: Option<&'static str>,
    pub status: StatusWord,
    /// SW2 of a `90 xx` word that is not in the catalog.
    pub subcode: Option<u8>,
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Classify the last two bytes of `response`.
///
/// Unlisted `90 xx` words are device-specific success variants and carry
/// SW2 as `subcode`. Anything else unlisted is `UnknownError` without a
/// meaning.
pub fn classify(response: &[u8]) -> Result<ResponseOutcome> {
    let status = StatusWord::from_response(response)?;
    if let Some(entry) = STATUS_CATALOG.iter().find(|e| e.status == status) {
        return Ok(ResponseOutcome {
            kind: entry.kind,
            meaning: Some(entry.meaning),
            status,
            subcode: None,
        });
    }
    if status.sw1() == 0x90 {
        return Ok(ResponseOutcome {
            kind: OutcomeKind::Success,
            meaning: Some(STATUS_CATALOG[0].meaning),
            status,
            subcode: Some(status.sw2()),
        });
    }
    Ok(ResponseOutcome {
        kind: OutcomeKind::UnknownError,
        meaning: None,
        status,
        subcode: None,
    })
}

/// Payload without the status word, only when the response is a success.
pub fn unwrap_payload(response: &[u8]) -> Option<&[u8]> {
    match classify(response) {
        Ok(outcome) if outcome.is_success() => Some(&response[..response.len() - 2]),
        _ => None,
    }
}

/// Like `unwrap_payload`, but turns a failure status into `Error::CardStatus`.
pub fn expect_payload(response: &[u8]) -> Result<&[u8]> {
    let outcome = classify(response)?;
    if outcome.is_success() {
        Ok(&response[..response.len() - 2])
    } else {
        Err(Error::CardStatus {
            sw1: outcome.status.sw1(),
            sw2: outcome.status.sw2(),
        })
    }
}
