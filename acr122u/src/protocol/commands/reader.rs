// acr122u/src/protocol/commands/reader.rs
//! Reader-facing pseudo-APDUs (P1 selects the reader function).

use crate::constants::PSEUDO_APDU_CLASS as CLA;
use crate::types::BuzzerLink;

/// FF 00 00 00 <len> <payload>: pass `payload` straight to the PN532.
pub fn direct_transmit(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5 + payload.len());
    buf.extend_from_slice(&[CLA, 0x00, 0x00, 0x00, payload.len() as u8]);
    buf.extend_from_slice(payload);
    buf
}

/// FF 00 40 <led state> 04 <t1> <t2> <repetitions> <buzzer link>
///
/// T1/T2 are in units of 100 ms. See `constants::led` for the state bits.
pub fn led_and_buzzer_control(
    led_state: u8,
    t1: u8,
    t2: u8,
    repetitions: u8,
    buzzer: BuzzerLink,
) -> Vec<u8> {
    vec![
        CLA,
        0x00,
        0x40,
        led_state,
        0x04,
        t1,
        t2,
        repetitions,
        buzzer as u8,
    ]
}

/// FF 00 48 00 00
pub fn get_firmware_version() -> Vec<u8> {
    vec![CLA, 0x00, 0x48, 0x00, 0x00]
}

/// FF 00 50 00 00
pub fn get_picc_operating_parameter() -> Vec<u8> {
    vec![CLA, 0x00, 0x50, 0x00, 0x00]
}

/// FF 00 51 <parameter> 00
pub fn set_picc_operating_parameter(parameter: u8) -> Vec<u8> {
    vec![CLA, 0x00, 0x51, parameter, 0x00]
}

/// FF 00 41 <timeout> 00 (units of 5 s; 0x00 disables, 0xFF waits forever)
pub fn set_timeout_parameter(timeout: u8) -> Vec<u8> {
    vec![CLA, 0x00, 0x41, timeout, 0x00]
}

/// FF 00 52 <FF|00> 00
pub fn set_buzzer_activity_on_detection(enabled: bool) -> Vec<u8> {
    let flag = if enabled { 0xFF } else { 0x00 };
    vec![CLA, 0x00, 0x52, flag, 0x00]
}
