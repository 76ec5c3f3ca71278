//! Walk through a full card session against the mock transport: insert a
//! MIFARE Ultralight, read its UID and check bytes, query the reader and
//! remove the card again.
//!
//! Run with `RUST_LOG=debug cargo run --example mock_session`.

use std::sync::Arc;

use acr122u::constants::led;
use acr122u::device::{Control, LifecycleEvent, ReaderConfig};
use acr122u::prelude::*;
use acr122u::test_support::{CARD_ABSENT, CARD_PRESENT};
use acr122u::transport::{MockReader, MockTransport};
use acr122u::utils::ms;
use anyhow::{Context, bail};
use tokio::sync::mpsc;

const ULTRALIGHT_ATR: &str = "3B 8F 80 01 80 4F 0C A0 00 00 03 06 03 00 03 00 00 00 00 68";

fn script_card(reader: &MockReader) -> anyhow::Result<()> {
    reader.push_response(parse_hex("04 4B 77 52 1E 4E 81 90 00").map_err(anyhow::Error::msg)?);
    // Pages 0..3: UID0-2 + BCC0, UID3-6, BCC1 + internal + lock bytes.
    reader.push_response(
        parse_hex("04 4B 77 B0 52 1E 4E 81 83 48 00 00 E1 10 06 00 90 00")
            .map_err(anyhow::Error::msg)?,
    );
    reader.push_response(b"ACR122U201".to_vec());
    reader.push_response(vec![0x90, 0xFF]);
    reader.push_response(vec![0x90, 0x00]);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mock = MockTransport::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let config = ReaderConfig::new()
        .with_debug_mode(true)
        .with_channel(tx)
        .on_pcsc_error(|e| eprintln!("PC/SC error: {}", e.error));
    let monitor = prepare_reader(Arc::new(mock.clone()), config).await?;

    let reader = mock.add_reader("ACS ACR122U PICC Interface 00");
    script_card(&reader)?;
    let atr = parse_hex(ULTRALIGHT_ATR).map_err(anyhow::Error::msg)?;
    reader.push_status(CARD_ABSENT, &[]);
    reader.push_status(CARD_PRESENT, &atr);

    while let Some(event) = rx.recv().await {
        match event {
            LifecycleEvent::Connect(e) => {
                println!(
                    "{}: card connected ({}), {}",
                    e.reader,
                    e.protocol,
                    e.info
                        .card_type()
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "not a storage card".to_string())
                );
                let conn = e.connection;

                let resp = conn.transmit(Command::GetUid).await?;
                let uid = Uid::from_bytes(unwrap_payload(&resp).context("get-uid failed")?);
                println!("UID: {}", uid.to_hex());

                let resp = conn
                    .transmit(Command::ReadBinaryBlock {
                        block: 0,
                        num_bytes: 16,
                    })
                    .await?;
                let pages = unwrap_payload(&resp).context("read failed")?;
                let bcc0 = *pages.get(3).context("page 0 too short")?;
                let bcc1 = *pages.get(8).context("page 2 too short")?;
                if !uid.verify_bcc(bcc0, bcc1)? {
                    bail!("UID check bytes do not match");
                }
                println!("BCC0 {bcc0:02X}, BCC1 {bcc1:02X}: ok");

                let fw = conn
                    .control(Control::escape(Command::GetFirmwareVersion))
                    .await?;
                println!("firmware: {}", acr122u::protocol::decode_firmware_version(&fw));

                let resp = conn
                    .control(Control::escape(Command::GetPiccOperatingParameter))
                    .await?;
                let picc = PiccOperatingParameter::decode(&resp)?;
                println!("PICC parameter: {:#04x}", picc.bits());

                conn.control(Control::escape(Command::LedAndBuzzerControl {
                    led_state: led::FINAL_GREEN | led::GREEN_STATE_MASK,
                    t1: 1,
                    t2: 1,
                    repetitions: 1,
                    buzzer: BuzzerLink::DuringT1,
                }))
                .await?;

                pause(ms(100)).await;
                reader.push_status(CARD_ABSENT, &[]);
            }
            LifecycleEvent::CardRemoved(e) if e.status == CARD_ABSENT => {
                println!("{}: waiting for card", e.reader);
                if !reader.connects().is_empty() {
                    e.exit.close().await?;
                }
            }
            LifecycleEvent::End(e) => println!("{}: reader removed", e.reader),
            other => println!("{}", other.kind()),
        }
    }

    monitor.join().await;
    Ok(())
}
