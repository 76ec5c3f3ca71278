#[path = "../common/mod.rs"]
mod common;

use acr122u::StatusWord;
use acr122u::protocol::{
    OutcomeKind, PiccOperatingParameter, classify, decode_firmware_version, expect_payload,
    unwrap_payload,
};
use proptest::prelude::*;

#[test]
fn uid_response_payload() {
    let resp = common::fixtures::uid_response();
    assert_eq!(classify(&resp).unwrap().kind, OutcomeKind::Success);
    assert_eq!(unwrap_payload(&resp).unwrap(), &common::fixtures::sample_uid()[..]);
}

#[test]
fn classify_examples() {
    let variant = classify(&[0x90, 0x05]).unwrap();
    assert_eq!(variant.kind, OutcomeKind::Success);
    assert_eq!(variant.subcode, Some(0x05));

    let unknown = classify(&[0x00, 0xFF, 0xFF]).unwrap();
    assert_eq!(unknown.kind, OutcomeKind::UnknownError);
    assert_eq!(unknown.meaning, None);
    assert_eq!(unknown.status, StatusWord::new(0xFF, 0xFF));

    let failed = classify(&[0x63, 0x00]).unwrap();
    assert_eq!(failed.kind, OutcomeKind::KnownError);
    assert!(unwrap_payload(&[0x63, 0x00]).is_none());
    assert!(expect_payload(&[0x63, 0x00]).is_err());

    let unsupported = classify(&[0x6A, 0x81]).unwrap();
    assert_eq!(unsupported.kind, OutcomeKind::KnownError);
    assert_eq!(unsupported.meaning, Some("Function not supported."));
    assert_eq!(unsupported.subcode, None);
}

#[test]
fn reader_responses() {
    assert_eq!(decode_firmware_version(b"ACR122U201"), "ACR122U201");
    let p = PiccOperatingParameter::decode(&[0x90, 0xFF]).unwrap();
    assert_eq!(p, PiccOperatingParameter::default());
}

proptest! {
    #[test]
    fn classify_never_panics(v in prop::collection::vec(any::<u8>(), 0..64)) {
        let result = classify(&v);
        prop_assert_eq!(result.is_ok(), v.len() >= 2);
        if let Ok(outcome) = result {
            prop_assert_eq!(outcome.is_success(), v[v.len() - 2] == 0x90);
        }
    }
}
