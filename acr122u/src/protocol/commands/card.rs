// acr122u/src/protocol/commands/card.rs
//! Card-facing pseudo-APDUs (UID, MIFARE authentication, binary and value
//! blocks). Block numbers wrap to their low byte.

use crate::constants::PSEUDO_APDU_CLASS as CLA;
use crate::types::{KeyType, ValueOp};
use crate::{Error, Result};

/// Bytes read by `read_binary_block` when no length is given.
pub const DEFAULT_BLOCK_READ_LEN: u8 = 16;

/// Length of a MIFARE key.
pub const KEY_LEN: usize = 6;

pub(crate) fn low_byte(v: u16) -> u8 {
    (v & 0xff) as u8
}

/// FF CA 00 00 00
pub fn get_uid() -> Vec<u8> {
    vec![CLA, 0xCA, 0x00, 0x00, 0x00]
}

/// FF 82 00 <slot> 06 <key[0..6]>. Slot is taken modulo 2 and only the
/// first six bytes of `key` are used.
pub fn load_authentication_keys(key_slot: u8, key: &[u8]) -> Result<Vec<u8>> {
    let key: &[u8; KEY_LEN] = key
        .get(..KEY_LEN)
        .and_then(|k| k.try_into().ok())
        .ok_or(Error::InvalidLength {
            expected: KEY_LEN,
            actual: key.len(),
        })?;
    Ok(load_authentication_key(key_slot, key))
}

/// Infallible form of `load_authentication_keys` for an exact key.
pub fn load_authentication_key(key_slot: u8, key: &[u8; KEY_LEN]) -> Vec<u8> {
    let mut buf = vec![CLA, 0x82, 0x00, key_slot % 2, KEY_LEN as u8];
    buf.extend_from_slice(key);
    buf
}

/// FF 86 00 00 05 01 00 <block> <key type> <slot>
pub fn authenticate(block: u16, key_type: KeyType, key_slot: u8) -> Vec<u8> {
    vec![
        CLA,
        0x86,
        0x00,
        0x00,
        0x05,
        0x01,
        0x00,
        low_byte(block),
        key_type as u8,
        key_slot % 2,
    ]
}

/// FF B0 00 <block> <len>
pub fn read_binary_block(block: u16, num_bytes: u8) -> Vec<u8> {
    vec![CLA, 0xB0, 0x00, low_byte(block), num_bytes]
}

/// FF D6 00 <block> <len> <payload>. The length byte wraps for payloads
/// longer than 255 bytes.
pub fn write_binary_block(block: u16, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5 + payload.len());
    buf.extend_from_slice(&[CLA, 0xD6, 0x00, low_byte(block), payload.len() as u8]);
    buf.extend_from_slice(payload);
    buf
}

/// FF D7 00 <block> 05 <op> <value (4 bytes, big endian on the card)>
pub fn value_block_operation(block: u16, op: ValueOp, value: [u8; 4]) -> Vec<u8> {
    let mut buf = vec![CLA, 0xD7, 0x00, low_byte(block), 0x05, op as u8];
    buf.extend_from_slice(&value);
    buf
}

/// FF B1 00 <block> 04
pub fn value_block_read(block: u16) -> Vec<u8> {
    vec![CLA, 0xB1, 0x00, low_byte(block), 0x04]
}

/// FF D7 00 <src> 02 03 <dst>
pub fn value_block_restore(src_block: u16, dst_block: u16) -> Vec<u8> {
    vec![
        CLA,
        0xD7,
        0x00,
        low_byte(src_block),
        0x02,
        0x03,
        low_byte(dst_block),
    ]
}
