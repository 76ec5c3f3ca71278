// acr122u/src/constants.rs
//! Reader and card constants shared by the encoders and decoders.

/// Class byte of every ACR122U pseudo-APDU.
pub const PSEUDO_APDU_CLASS: u8 = 0xFF;

/// Default response buffer size handed to `transmit`/`control`.
pub const DEFAULT_RESPONSE_LEN: usize = 255;

/// Operation name used when the caller does not provide one.
pub const UNNAMED_OPERATION: &str = "unnamed-operation";

/// Expected first ATR byte (direct convention TS).
pub const ATR_INITIAL_HEADER: u8 = 0x3B;

/// Offset applied to T0 to obtain the historical byte count.
pub const ATR_HISTORICAL_BYTES_BASE: u8 = 0x80;

/// Marker at ATR offset 4 identifying a PC/SC part 3 storage card.
pub const ATR_PART3_MARKER: [u8; 2] = [0x80, 0x4F];

/// Cascade tag XORed into the first UID check digit (BCC0).
pub const UID_CASCADE_TAG: u8 = 0x88;

/// Vendor control code of the CCID escape command.
pub const ESCAPE_CONTROL_FUNCTION: u32 = 3500;

/// `SCARD_CTL_CODE(3500)` as computed by pcsc-lite.
pub const ESCAPE_CONTROL_CODE: u32 = scard_ctl_code(ESCAPE_CONTROL_FUNCTION);

/// Build a PC/SC control code the way pcsc-lite does (`0x42000000 + code`).
pub const fn scard_ctl_code(code: u32) -> u32 {
    0x4200_0000 + code
}

/// LED state control bits (P2 of the LED and buzzer command).
pub mod led {
    pub const FINAL_RED: u8 = 0x01;
    pub const FINAL_GREEN: u8 = 0x02;
    pub const RED_STATE_MASK: u8 = 0x04;
    pub const GREEN_STATE_MASK: u8 = 0x08;
    pub const INITIAL_RED_BLINKING_STATE: u8 = 0x10;
    pub const INITIAL_GREEN_BLINKING_STATE: u8 = 0x20;
    pub const RED_BLINKING_MASK: u8 = 0x40;
    pub const GREEN_BLINKING_MASK: u8 = 0x80;
}

/// PICC operating parameter bits.
pub mod picc {
    pub const DEFAULT: u8 = 0xFF;
    pub const AUTO_PICC_POLLING: u8 = 0x01;
    pub const AUTO_ATS_GENERATION: u8 = 0x02;
    /// Set: 250 ms polling interval, clear: 500 ms.
    pub const SHORTER_POLLING_INTERVAL: u8 = 0x04;
    pub const DETECT_FELICA_424K: u8 = 0x08;
    pub const DETECT_FELICA_212K: u8 = 0x10;
    pub const DETECT_TOPAZ: u8 = 0x20;
    pub const DETECT_ISO14443B: u8 = 0x40;
    pub const DETECT_ISO14443A: u8 = 0x80;
}
