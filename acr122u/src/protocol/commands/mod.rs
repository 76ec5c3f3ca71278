// acr122u/src/protocol/commands/mod.rs

pub mod card;
pub mod reader;

pub use card::{
    DEFAULT_BLOCK_READ_LEN, KEY_LEN, authenticate, get_uid, load_authentication_key,
    load_authentication_keys, read_binary_block, value_block_operation, value_block_read,
    value_block_restore, write_binary_block,
};
pub use reader::{
    direct_transmit, get_firmware_version, get_picc_operating_parameter,
    led_and_buzzer_control, set_buzzer_activity_on_detection, set_picc_operating_parameter,
    set_timeout_parameter,
};

use crate::types::{BuzzerLink, KeyType, ValueOp};

/// High-level Command enum. New commands should be added here and
/// their encoder placed in `card.rs` (card-facing) or `reader.rs`
/// (reader-facing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetUid,
    LoadAuthenticationKeys {
        key_slot: u8,
        key: [u8; KEY_LEN],
    },
    Authenticate {
        block: u16,
        key_type: KeyType,
        key_slot: u8,
    },
    ReadBinaryBlock {
        block: u16,
        num_bytes: u8,
    },
    WriteBinaryBlock {
        block: u16,
        data: Vec<u8>,
    },
    ValueBlockOperation {
        block: u16,
        op: ValueOp,
        value: [u8; 4],
    },
    ValueBlockRead {
        block: u16,
    },
    ValueBlockRestore {
        src_block: u16,
        dst_block: u16,
    },
    DirectTransmit {
        payload: Vec<u8>,
    },
    LedAndBuzzerControl {
        led_state: u8,
        t1: u8,
        t2: u8,
        repetitions: u8,
        buzzer: BuzzerLink,
    },
    GetFirmwareVersion,
    GetPiccOperatingParameter,
    SetPiccOperatingParameter {
        parameter: u8,
    },
    SetTimeoutParameter {
        timeout: u8,
    },
    SetBuzzerActivityOnDetection {
        enabled: bool,
    },
}

impl Command {
    /// Instruction byte (INS) of the encoded pseudo-APDU.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::GetUid => 0xCA,
            Self::LoadAuthenticationKeys { .. } => 0x82,
            Self::Authenticate { .. } => 0x86,
            Self::ReadBinaryBlock { .. } => 0xB0,
            Self::WriteBinaryBlock { .. } => 0xD6,
            Self::ValueBlockOperation { .. } | Self::ValueBlockRestore { .. } => 0xD7,
            Self::ValueBlockRead { .. } => 0xB1,
            Self::DirectTransmit { .. }
            | Self::LedAndBuzzerControl { .. }
            | Self::GetFirmwareVersion
            | Self::GetPiccOperatingParameter
            | Self::SetPiccOperatingParameter { .. }
            | Self::SetTimeoutParameter { .. }
            | Self::SetBuzzerActivityOnDetection { .. } => 0x00,
        }
    }

    /// Human-readable operation name, used to tag log records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetUid => "get-uid",
            Self::LoadAuthenticationKeys { .. } => "load-authentication-keys",
            Self::Authenticate { .. } => "authenticate",
            Self::ReadBinaryBlock { .. } => "read-binary-block",
            Self::WriteBinaryBlock { .. } => "write-binary-block",
            Self::ValueBlockOperation { .. } => "value-block-operation",
            Self::ValueBlockRead { .. } => "value-block-read",
            Self::ValueBlockRestore { .. } => "value-block-restore",
            Self::DirectTransmit { .. } => "direct-transmit",
            Self::LedAndBuzzerControl { .. } => "led-and-buzzer-control",
            Self::GetFirmwareVersion => "get-firmware-version",
            Self::GetPiccOperatingParameter => "get-picc-operating-parameter",
            Self::SetPiccOperatingParameter { .. } => "set-picc-operating-parameter",
            Self::SetTimeoutParameter { .. } => "set-timeout-parameter",
            Self::SetBuzzerActivityOnDetection { .. } => "set-buzzer-activity-on-detection",
        }
    }

    /// Encode the command into its raw pseudo-APDU bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetUid => get_uid(),
            Self::LoadAuthenticationKeys { key_slot, key } => {
                load_authentication_key(*key_slot, key)
            }
            Self::Authenticate {
                block,
                key_type,
                key_slot,
            } => authenticate(*block, *key_type, *key_slot),
            Self::ReadBinaryBlock { block, num_bytes } => read_binary_block(*block, *num_bytes),
            Self::WriteBinaryBlock { block, data } => write_binary_block(*block, data),
            Self::ValueBlockOperation { block, op, value } => {
                value_block_operation(*block, *op, *value)
            }
            Self::ValueBlockRead { block } => value_block_read(*block),
            Self::ValueBlockRestore {
                src_block,
                dst_block,
            } => value_block_restore(*src_block, *dst_block),
            Self::DirectTransmit { payload } => direct_transmit(payload),
            Self::LedAndBuzzerControl {
                led_state,
                t1,
                t2,
                repetitions,
                buzzer,
            } => led_and_buzzer_control(*led_state, *t1, *t2, *repetitions, *buzzer),
            Self::GetFirmwareVersion => get_firmware_version(),
            Self::GetPiccOperatingParameter => get_picc_operating_parameter(),
            Self::SetPiccOperatingParameter { parameter } => {
                set_picc_operating_parameter(*parameter)
            }
            Self::SetTimeoutParameter { timeout } => set_timeout_parameter(*timeout),
            Self::SetBuzzerActivityOnDetection { enabled } => {
                set_buzzer_activity_on_detection(*enabled)
            }
        }
    }
}
