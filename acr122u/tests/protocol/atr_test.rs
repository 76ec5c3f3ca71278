#[path = "../common/mod.rs"]
mod common;

use acr122u::StatusBits;
use acr122u::protocol::atr::{AtrProtocol, Problem};
use acr122u::protocol::AtrInfo;
use proptest::prelude::*;

fn parse(atr: &[u8]) -> AtrInfo {
    AtrInfo::parse(common::fixtures::CARD_PRESENT, atr)
}

#[test]
fn classic_1k_is_clean_part3() {
    let info = parse(&common::fixtures::classic_1k_atr());
    let d = info.details.as_ref().unwrap();
    assert_eq!(d.num_historical_bytes, 15);
    assert_eq!(d.historical_bytes.len(), 15);
    assert!(matches!(d.protocol, AtrProtocol::Iso14443Part3(_)));
    assert!(d.problems.is_empty());
    assert_eq!(info.card_type().and_then(|c| c.name()), Some("MIFARE Classic 1K"));
    assert_eq!(info.state, StatusBits::new(0x22));
}

#[test]
fn ultralight_card_name() {
    let info = parse(&common::fixtures::ultralight_atr());
    assert!(!info.has_problems());
    assert_eq!(info.card_type().and_then(|c| c.name()), Some("MIFARE Ultralight"));
}

#[test]
fn corrupted_check_digit_adds_one_problem() {
    let good = parse(&common::fixtures::classic_1k_atr());
    let mut atr = common::fixtures::classic_1k_atr();
    let last = atr.len() - 1;
    atr[last] ^= 0xFF;
    let bad = parse(&atr);

    let g = good.details.unwrap();
    let b = bad.details.unwrap();
    assert_eq!(
        b.problems,
        vec![Problem::BadCheckDigit {
            got: Some(0x95),
            expected: 0x6A
        }]
    );
    assert_eq!(b.historical_bytes, g.historical_bytes);
    assert_eq!(b.expected_check_digit, g.expected_check_digit);
    assert_eq!(b.protocol, g.protocol);
    assert_eq!(b.num_historical_bytes, g.num_historical_bytes);
}

#[test]
fn wrong_initial_header_is_reported() {
    let mut atr = common::fixtures::classic_1k_atr();
    atr[0] = 0x3F;
    let info = parse(&atr);
    assert_eq!(info.problems(), &[Problem::BadInitialHeader { got: 0x3F }]);
}

#[test]
fn unknown_card_keeps_identifier() {
    let mut atr = common::fixtures::classic_1k_atr();
    atr[13] = 0x12;
    atr[14] = 0x34;
    let info = parse(&atr);
    let card = info.card_type().unwrap();
    assert_eq!(card.name(), None);
    assert_eq!(card.identifier(), &[0x12, 0x34]);
}

#[test]
fn truncated_atr_is_clamped() {
    let atr = &common::fixtures::classic_1k_atr()[..10];
    let info = parse(atr);
    let d = info.details.unwrap();
    assert_eq!(d.historical_bytes.len(), 6);
    assert_eq!(d.check_digit, None);
    assert!(d.problems.contains(&Problem::HistoricalBytesOutOfRange {
        declared: 15,
        available: 6
    }));
}

#[test]
fn empty_atr_has_no_details() {
    let info = AtrInfo::parse(common::fixtures::CARD_ABSENT, &[]);
    assert!(info.details.is_none());
    assert!(info.problems().is_empty());
}

proptest! {
    #[test]
    fn any_other_initial_header_is_reported(ts in any::<u8>().prop_filter("not 0x3B", |b| *b != 0x3B)) {
        let good = parse(&common::fixtures::classic_1k_atr());
        let mut atr = common::fixtures::classic_1k_atr();
        atr[0] = ts;
        let info = parse(&atr);
        prop_assert_eq!(info.problems(), &[Problem::BadInitialHeader { got: ts }][..]);
        let (g, b) = (good.details.unwrap(), info.details.unwrap());
        prop_assert_eq!(b.protocol, g.protocol);
        prop_assert_eq!(b.check_digit, g.check_digit);
    }
}
