#[path = "../common/mod.rs"]
mod common;

use acr122u::device::{LifecycleEvent, ReaderConfig};
use acr122u::test_support::monitor_with_channel;
use acr122u::transport::MockTransport;
use acr122u::{Disposition, Error, ShareMode};

use common::fixtures::{CARD_ABSENT, CARD_PRESENT};
use common::{assert_no_event, next_event};

#[tokio::test]
async fn insert_then_remove_emits_connect_and_one_removal() {
    common::init_logger();
    let mock = MockTransport::new();
    let (monitor, mut rx) = monitor_with_channel(&mock, ReaderConfig::new().with_debug_mode(true))
        .await
        .unwrap();
    let reader = mock.add_reader("ACS ACR122U PICC Interface 00");

    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    let connect = match next_event(&mut rx).await {
        LifecycleEvent::Connect(e) => e,
        other => panic!("expected connect, got {}", other.kind()),
    };
    assert_eq!(connect.reader, "ACS ACR122U PICC Interface 00");
    assert_eq!(connect.status, CARD_PRESENT);
    assert_eq!(
        connect.info.card_type().and_then(|c| c.name()),
        Some("MIFARE Classic 1K")
    );
    assert_eq!(reader.connects(), vec![ShareMode::Shared]);

    reader.push_response(common::fixtures::uid_response());
    let uid = connect
        .connection
        .transmit(acr122u::protocol::Command::GetUid)
        .await
        .unwrap();
    assert_eq!(uid, common::fixtures::uid_response());

    reader.push_status(CARD_ABSENT, &[]);
    match next_event(&mut rx).await {
        LifecycleEvent::CardRemoved(e) => assert_eq!(e.status, CARD_ABSENT),
        other => panic!("expected card-removed, got {}", other.kind()),
    }
    assert_eq!(reader.disconnects(), vec![Disposition::Leave]);
    assert!(!connect.connection.is_active());

    connect.exit.close().await.unwrap();
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::End(_)));
    monitor.join().await;
    assert_no_event(&mut rx);
    assert_eq!(mock.close_calls(), 1);
}

#[tokio::test]
async fn connect_failure_emits_connect_error() {
    let mock = MockTransport::new();
    let (_monitor, mut rx) = monitor_with_channel(&mock, ReaderConfig::new()).await.unwrap();
    let reader = mock.add_reader("R1");
    reader.set_connect_failures(1);

    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    match next_event(&mut rx).await {
        LifecycleEvent::ConnectError(e) => {
            assert!(e.error.is_transport());
            assert!(!e.info.has_problems());
        }
        other => panic!("expected connect-error, got {}", other.kind()),
    }

    // Back to idle: the next insertion connects.
    reader.push_status(CARD_ABSENT, &[]);
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::CardRemoved(_)));
    assert!(reader.disconnects().is_empty());
    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::Connect(_)));
}

#[tokio::test]
async fn disconnect_failure_emits_removal_error_and_returns_to_idle() {
    let mock = MockTransport::new();
    let (_monitor, mut rx) = monitor_with_channel(&mock, ReaderConfig::new()).await.unwrap();
    let reader = mock.add_reader("R1");
    reader.set_disconnect_failures(1);

    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::Connect(_)));
    reader.push_status(CARD_ABSENT, &[]);
    match next_event(&mut rx).await {
        LifecycleEvent::CardRemovedError(e) => assert!(e.error.is_transport()),
        other => panic!("expected card-removed-error, got {}", other.kind()),
    }

    reader.push_status(CARD_PRESENT, &common::fixtures::ultralight_atr());
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::Connect(_)));
    assert_eq!(reader.connects().len(), 2);
}

#[tokio::test]
async fn repeated_present_status_connects_once() {
    let mock = MockTransport::new();
    let (_monitor, mut rx) = monitor_with_channel(&mock, ReaderConfig::new()).await.unwrap();
    let reader = mock.add_reader("R1");

    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::Connect(_)));

    reader.end();
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::End(_)));
    assert_eq!(reader.connects().len(), 1);
}

#[tokio::test]
async fn reader_end_invalidates_connection() {
    let mock = MockTransport::new();
    let (_monitor, mut rx) = monitor_with_channel(&mock, ReaderConfig::new()).await.unwrap();
    let reader = mock.add_reader("R1");

    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    let connection = match next_event(&mut rx).await {
        LifecycleEvent::Connect(e) => e.connection,
        other => panic!("expected connect, got {}", other.kind()),
    };
    reader.end();
    assert!(matches!(next_event(&mut rx).await, LifecycleEvent::End(_)));
    assert_eq!(
        connection.transmit(vec![0xFF, 0xCA, 0x00, 0x00, 0x00]).await,
        Err(Error::NotConnected)
    );
}

#[tokio::test]
async fn readers_run_independently() {
    let mock = MockTransport::new();
    let (_monitor, mut rx) = monitor_with_channel(&mock, ReaderConfig::new()).await.unwrap();
    let r1 = mock.add_reader("R1");
    let r2 = mock.add_reader("R2");

    r1.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    r2.push_status(CARD_ABSENT, &[]);

    let first = next_event(&mut rx).await;
    let second = next_event(&mut rx).await;
    let mut kinds = [first, second]
        .iter()
        .map(|e| (e.reader().map(str::to_string), e.kind()))
        .collect::<Vec<_>>();
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            (Some("R1".to_string()), "connect"),
            (Some("R2".to_string()), "card-removed"),
        ]
    );
    assert!(r1.is_connected());
    assert!(!r2.is_connected());
}

#[tokio::test]
async fn handlers_receive_events() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(Vec::new()));
    let (s1, s2) = (seen.clone(), seen.clone());
    let config = ReaderConfig::new()
        .on_connect(move |e| s1.lock().unwrap().push(format!("connect {}", e.reader)))
        .on_end(move |e| s2.lock().unwrap().push(format!("end {}", e.reader)));

    let mock = MockTransport::new();
    let (monitor, mut rx) = monitor_with_channel(&mock, config).await.unwrap();
    let reader = mock.add_reader("R1");
    reader.push_status(CARD_PRESENT, &common::fixtures::classic_1k_atr());
    let exit = match next_event(&mut rx).await {
        LifecycleEvent::Connect(e) => e.exit,
        other => panic!("expected connect, got {}", other.kind()),
    };
    exit.close().await.unwrap();
    monitor.join().await;

    assert_eq!(*seen.lock().unwrap(), vec!["connect R1", "end R1"]);
}
