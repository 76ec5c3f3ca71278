#[path = "../common/mod.rs"]
mod common;

use acr122u::transport::{MockTransport, ReaderEvent, ReaderTransport, Transport, TransportEvent};
use acr122u::{Disposition, Protocol, ShareMode};

#[tokio::test]
async fn watch_announces_readers_in_order() {
    let mock = MockTransport::new();
    mock.add_reader("R1");
    let mut events = mock.watch().await.unwrap();
    mock.add_reader("R2");

    let mut names = Vec::new();
    for _ in 0..2 {
        match events.recv().await {
            Some(TransportEvent::ReaderAdded(d)) => names.push(d.reader.name().to_string()),
            other => panic!("unexpected event: {:?}", other),
        }
    }
    assert_eq!(names, vec!["R1", "R2"]);
    assert!(mock.watch().await.is_err());
}

#[tokio::test]
async fn reader_records_connect_disconnect_and_control() {
    let mock = MockTransport::new();
    let reader = mock.add_reader("R1");
    reader.set_protocol(Protocol::T0);
    reader.push_response(vec![0x90, 0x00]);

    assert_eq!(reader.connect(ShareMode::Direct).await.unwrap(), Protocol::T0);
    reader.control(&[0xFF, 0x00, 0x48, 0x00, 0x00], 0x4200_0DAC, 255).await.unwrap();
    reader.disconnect(Disposition::Reset).await.unwrap();

    assert_eq!(reader.connects(), vec![ShareMode::Direct]);
    assert_eq!(reader.disconnects(), vec![Disposition::Reset]);
    assert_eq!(reader.controls().len(), 1);
    assert!(!reader.is_connected());
}

#[tokio::test]
async fn reader_events_are_delivered_in_order() {
    let mock = MockTransport::new();
    let mut events = mock.watch().await.unwrap();
    let reader = mock.add_reader("R1");
    let mut stream = match events.recv().await {
        Some(TransportEvent::ReaderAdded(d)) => d.events,
        other => panic!("unexpected event: {:?}", other),
    };

    reader.push_status(common::fixtures::CARD_PRESENT, &common::fixtures::CLASSIC_1K_ATR);
    reader.push_status(common::fixtures::CARD_ABSENT, &[]);
    reader.end();
    reader.push_status(common::fixtures::CARD_PRESENT, &[]);

    match stream.recv().await {
        Some(ReaderEvent::Status(s)) => {
            assert_eq!(s.state, common::fixtures::CARD_PRESENT);
            assert_eq!(s.atr, common::fixtures::classic_1k_atr());
        }
        other => panic!("unexpected event: {:?}", other),
    }
    assert!(matches!(stream.recv().await, Some(ReaderEvent::Status(_))));
    assert_eq!(stream.recv().await, Some(ReaderEvent::Ended));
    // Nothing is delivered after the reader ended.
    assert_eq!(stream.recv().await, None);
}
