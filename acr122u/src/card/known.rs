// acr122u/src/card/known.rs

/// A card family recognised from the PC/SC part 3 ATR card name bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KnownCard {
    pub name: &'static str,
    pub identifier: [u8; 2],
}

/// Lookup table, searched in order; the first exact match wins.
pub const KNOWN_CARDS: &[KnownCard] = &[
    KnownCard {
        name: "MIFARE Classic 1K",
        identifier: [0x00, 0x01],
    },
    KnownCard {
        name: "MIFARE Classic 4K",
        identifier: [0x00, 0x02],
    },
    KnownCard {
        name: "MIFARE Ultralight",
        identifier: [0x00, 0x03],
    },
    KnownCard {
        name: "MIFARE Mini",
        identifier: [0x00, 0x26],
    },
    KnownCard {
        name: "Topaz and Jewel",
        identifier: [0xF0, 0x04],
    },
    KnownCard {
        name: "FeliCa 212K",
        identifier: [0xF0, 0x11],
    },
    KnownCard {
        name: "FeliCa 424K",
        identifier: [0xF0, 0x12],
    },
];

/// Card family as far as the ATR tells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardType {
    Known(&'static KnownCard),
    /// No table entry matched; carries the raw identifier bytes (possibly
    /// fewer than two when the ATR is short).
    Unknown(Vec<u8>),
}

impl CardType {
    /// Resolve identifier bytes against `KNOWN_CARDS`.
    pub fn lookup(identifier: &[u8]) -> Self {
        KNOWN_CARDS
            .iter()
            .find(|card| card.identifier[..] == *identifier)
            .map(CardType::Known)
            .unwrap_or_else(|| CardType::Unknown(identifier.to_vec()))
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Known(card) => Some(card.name),
            Self::Unknown(_) => None,
        }
    }

    pub fn identifier(&self) -> &[u8] {
        match self {
            Self::Known(card) => &card.identifier,
            Self::Unknown(raw) => raw,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(card) => f.write_str(card.name),
            Self::Unknown(raw) => write!(f, "unknown card ({})", crate::utils::to_hex(raw)),
        }
    }
}
