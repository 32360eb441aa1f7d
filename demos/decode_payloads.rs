//! Decode a handful of captured advertisements and print the readings
//!
//! Run with: cargo run --example decode_payloads
//!
//! Pass `RUST_LOG=garnet_chefiq_ble=trace` to see the raw payloads.

use std::collections::HashMap;

use garnet_chefiq_ble::{Advertisement, Dispatcher, OutcomeStatus};

fn captures() -> Vec<(&'static str, Advertisement)> {
    let mut telemetry = vec![0x01, 0x00];
    for value in [215u16, 642, 587, 198, 203, 0, 1760, 0] {
        telemetry.extend_from_slice(&value.to_le_bytes());
    }

    vec![
        (
            "Garnet BTP3 battery",
            Advertisement::new(HashMap::from([(305, b"\x12\x34\x00\x0d126000000\x00".to_vec())]))
                .with_address("C4:DE:E2:10:7A:01"),
        ),
        (
            "Garnet BTP3 open grey tank",
            Advertisement::new(HashMap::from([(305, b"\x12\x34\x00\x02OPN000000\x00".to_vec())]))
                .with_address("C4:DE:E2:10:7A:01"),
        ),
        (
            "Garnet BTP7 tanks",
            Advertisement::new(HashMap::from([(
                3264,
                vec![0x2A, 0x00, 0x00, 66, 25, 110, 102, 0, 110, 0, 0, 129, 0, 0],
            )]))
            .with_address("D8:3B:BF:00:44:12"),
        ),
        (
            "Chef iQ telemetry",
            Advertisement::new(HashMap::from([(1485, telemetry)]))
                .with_address("A0:B7:65:3C:11:F2"),
        ),
        (
            "Unrelated device",
            Advertisement::new(HashMap::from([(76, vec![0x02, 0x15, 0x01])])),
        ),
    ]
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("garnet_chefiq_ble=debug")),
        )
        .init();

    let dispatcher = Dispatcher::new();

    for (label, advertisement) in captures() {
        println!("{label}:");

        let result = dispatcher.decode(&advertisement);
        if result.is_empty() {
            println!("  no known device\n");
            continue;
        }

        if let Some(address) = advertisement.address.as_deref() {
            if let Some(title) = result.title(address) {
                println!("  {title}");
            }
        }

        for reading in &result.readings {
            println!("  {reading}");
        }

        for outcome in &result.outcomes {
            if let OutcomeStatus::Decoded { notes, .. } = &outcome.status {
                for note in notes {
                    println!("  note: {note:?}");
                }
            }
        }
        println!();
    }
}
