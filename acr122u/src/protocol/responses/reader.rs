// acr122u/src/protocol/responses/reader.rs
//! Decoders for reader-facing command responses.

use crate::constants::picc;
use crate::protocol::parser;
use crate::Result;

/// Firmware version string (e.g. "ACR122U201"). The reader answers with
/// bare ASCII, no status word.
pub fn decode_firmware_version(response: &[u8]) -> String {
    String::from_utf8_lossy(response)
        .trim_end_matches('\0')
        .to_string()
}

/// PICC operating parameter as reported in `90 <param>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PiccOperatingParameter(u8);

impl PiccOperatingParameter {
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Decode the response to `get_picc_operating_parameter`.
    pub fn decode(response: &[u8]) -> Result<Self> {
        parser::byte_at(response, 1).map(Self)
    }

    fn has(&self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    pub fn auto_picc_polling(&self) -> bool {
        self.has(picc::AUTO_PICC_POLLING)
    }

    pub fn auto_ats_generation(&self) -> bool {
        self.has(picc::AUTO_ATS_GENERATION)
    }

    /// 250 ms polling interval when set, 500 ms otherwise.
    pub fn shorter_polling_interval(&self) -> bool {
        self.has(picc::SHORTER_POLLING_INTERVAL)
    }

    pub fn detect_felica_424k(&self) -> bool {
        self.has(picc::DETECT_FELICA_424K)
    }

    pub fn detect_felica_212k(&self) -> bool {
        self.has(picc::DETECT_FELICA_212K)
    }

    pub fn detect_topaz(&self) -> bool {
        self.has(picc::DETECT_TOPAZ)
    }

    pub fn detect_iso14443b(&self) -> bool {
        self.has(picc::DETECT_ISO14443B)
    }

    pub fn detect_iso14443a(&self) -> bool {
        self.has(picc::DETECT_ISO14443A)
    }
}

impl Default for PiccOperatingParameter {
    fn default() -> Self {
        Self(picc::DEFAULT)
    }
}
