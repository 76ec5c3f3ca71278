#[path = "../common/mod.rs"]
mod common;

use acr122u::Uid;
use acr122u::protocol::{check_digit, compute_check_digit};

#[test]
fn check_digit_examples() {
    assert_eq!(check_digit(&[]), 0x00);
    assert_eq!(check_digit(&[0x01, 0x02, 0x03]), 0x00);
    assert_eq!(compute_check_digit(&[0xF0], 0x0F), 0xFF);
}

#[test]
fn check_digit_self_cancels() {
    let atr = common::fixtures::classic_1k_atr();
    let digit = check_digit(&atr);
    assert_eq!(compute_check_digit(&atr, digit), 0x00);
}

#[test]
fn uid_bcc_of_double_size_uid() {
    let uid = Uid::from_bytes(&common::fixtures::sample_uid());
    assert_eq!(uid.bcc0().unwrap(), 0xB0);
    assert_eq!(uid.bcc1().unwrap(), 0x83);
    assert!(uid.verify_bcc(0xB0, 0x83).unwrap());
    assert!(!uid.verify_bcc(0xB0, 0x00).unwrap());
}

#[test]
fn uid_bcc_rejects_single_size_uid() {
    let uid = Uid::from_bytes(&[0x01, 0x02, 0x03, 0x04]);
    assert!(uid.bcc0().is_err());
}
