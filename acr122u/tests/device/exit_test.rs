#[path = "../common/mod.rs"]
mod common;

use acr122u::device::{LifecycleEvent, ReaderConfig};
use acr122u::test_support::monitor_with_channel;
use acr122u::transport::MockTransport;

use common::fixtures::CARD_PRESENT;
use common::next_event;

#[tokio::test]
async fn exit_from_two_readers_closes_transport_once() {
    let mock = MockTransport::new();
    let (monitor, mut rx) = monitor_with_channel(&mock, ReaderConfig::new()).await.unwrap();
    let r1 = mock.add_reader("R1");
    let r2 = mock.add_reader("R2");

    r1.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    r2.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    let mut exits = Vec::new();
    for _ in 0..2 {
        match next_event(&mut rx).await {
            LifecycleEvent::Connect(e) => exits.push(e.exit),
            other => panic!("expected connect, got {}", other.kind()),
        }
    }

    let (a, b, c) = tokio::join!(exits[0].close(), exits[1].close(), exits[0].close());
    a.unwrap();
    b.unwrap();
    c.unwrap();

    monitor.join().await;
    assert_eq!(r1.close_calls(), 1);
    assert_eq!(r2.close_calls(), 1);
    assert_eq!(mock.close_calls(), 1);
}

#[tokio::test]
async fn closing_transport_handle_ends_discovery() {
    let mock = MockTransport::new();
    let (monitor, _rx) = monitor_with_channel(&mock, ReaderConfig::new()).await.unwrap();
    assert!(monitor.transport().close().await.unwrap());
    monitor.join().await;
    assert!(mock.is_closed());
}
