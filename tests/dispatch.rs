//! Advertisement decoding through the public API.

use std::collections::HashMap;

use garnet_chefiq_ble::{
    decode_advertisement, Advertisement, DecodeNote, DeviceClass, DeviceModel, Dispatcher,
    InvalidReason, Reading, SensorKind, Unit,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn advertisement(manufacturer_id: u16, payload: Vec<u8>) -> Advertisement {
    Advertisement::new(HashMap::from([(manufacturer_id, payload)]))
}

fn btp3(sensor_type: u8, value: &[u8; 3]) -> Vec<u8> {
    let mut data = vec![0xA1, 0xB2, 0xC3, sensor_type];
    data.extend_from_slice(value);
    data.extend_from_slice(b"045");
    data.extend_from_slice(b"100");
    data.push(1);
    data
}

#[test]
fn btp3_battery_is_tenths_of_a_volt() {
    let result = decode_advertisement(&advertisement(305, btp3(13, b"123")));
    assert_eq!(result.readings, vec![Reading::voltage(Some(12.3))]);
    assert_eq!(result.readings[0].unit, Unit::Volt);
}

#[test]
fn btp3_open_sender_keeps_channel() {
    let result = decode_advertisement(&advertisement(305, btp3(2, b"OPN")));
    assert_eq!(
        result.readings,
        vec![Reading::percent(SensorKind::GreyTank, None)]
    );
    assert_eq!(
        result.notes().collect::<Vec<_>>(),
        vec![&DecodeNote::InvalidField {
            kind: SensorKind::GreyTank,
            reason: InvalidReason::Sentinel("OPN".to_string()),
        }]
    );
}

#[test]
fn btp3_boot_frame_has_no_readings() {
    let result = decode_advertisement(&advertisement(305, btp3(255, b"999")));
    assert!(result.readings.is_empty());
    assert_eq!(result.model, Some(DeviceModel::GarnetBtp3));
    assert_eq!(result.notes().collect::<Vec<_>>(), vec![&DecodeNote::BootFrame]);
}

#[test]
fn btp7_fault_code_reports_absent_value() {
    let mut payload = vec![0u8; 14];
    payload[4] = 110; // grey 1
    payload[7] = 50; // grey 2
    payload[11] = 124;

    let result = decode_advertisement(&advertisement(3264, payload));
    assert_eq!(result.readings.len(), 7);
    assert_eq!(
        result.readings[0],
        Reading::percent(SensorKind::GreyTank, None)
    );
    assert_eq!(
        result.readings[1],
        Reading::percent(SensorKind::GreyTank2, Some(50.0))
    );
    assert_eq!(result.readings[6], Reading::voltage(Some(12.4)));
}

#[test]
fn chef_iq_telemetry_meat_probe() {
    let mut payload = vec![1u8, 0];
    for value in [0u16, 250, 0, 0, 0, 0, 0, 0] {
        payload.extend_from_slice(&value.to_le_bytes());
    }

    let result = decode_advertisement(&advertisement(1485, payload));
    assert_eq!(result.model, Some(DeviceModel::ChefIqCq60));
    assert_eq!(result.readings.len(), 6);

    let meat = result
        .readings
        .iter()
        .find(|r| r.kind == SensorKind::TempMeat)
        .unwrap();
    assert_eq!(meat.value, Some(25.0));
    assert_eq!(meat.unit, Unit::DegreeCelsius);
    assert_eq!(meat.device_class, DeviceClass::Temperature);
}

#[test]
fn chef_iq_status_battery() {
    let mut payload = vec![3u8; 17];
    payload[8] = 87;

    let result = decode_advertisement(&advertisement(1485, payload));
    assert_eq!(result.readings, vec![Reading::battery_percent(Some(87.0))]);
}

#[test]
fn chef_iq_name_frame_is_discarded() {
    let result = decode_advertisement(&advertisement(1485, vec![0u8; 16]));
    assert!(result.readings.is_empty());
}

#[test]
fn mixed_advertisement_with_foreign_data() {
    let ad = Advertisement::new(HashMap::from([
        (76, vec![0x02, 0x15, 0x00]),
        (305, btp3(0, b"080")),
    ]))
    .with_address("F0:0D:00:00:BE:EF");

    let result = Dispatcher::new().decode(&ad);
    assert_eq!(
        result.readings,
        vec![Reading::percent(SensorKind::FreshTank, Some(80.0))]
    );
    assert_eq!(
        result.title(ad.address.as_deref().unwrap()).as_deref(),
        Some("Garnet 709-BTP3 BEEF")
    );
}

fn known_length(manufacturer_id: u16, len: usize) -> bool {
    match manufacturer_id {
        305 | 3264 => len == 14,
        _ => matches!(len, 16..=18),
    }
}

proptest! {
    #[test]
    fn decoding_is_idempotent(
        id in prop::sample::select(vec![305u16, 3264, 1485]),
        payload in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let ad = advertisement(id, payload);
        let dispatcher = Dispatcher::new();
        prop_assert_eq!(dispatcher.decode(&ad), dispatcher.decode(&ad));
    }

    #[test]
    fn unknown_lengths_yield_nothing(
        id in prop::sample::select(vec![305u16, 3264, 1485]),
        payload in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assume!(!known_length(id, payload.len()));
        let result = decode_advertisement(&advertisement(id, payload));
        prop_assert!(result.readings.is_empty());
        prop_assert!(result.model.is_none());
    }

    #[test]
    fn btp3_boot_frames_never_emit(rest in prop::collection::vec(any::<u8>(), 13)) {
        let mut payload = rest;
        payload.insert(3, 255);
        let result = decode_advertisement(&advertisement(305, payload));
        prop_assert!(result.readings.is_empty());
    }

    #[test]
    fn btp7_always_emits_seven(payload in prop::collection::vec(any::<u8>(), 14)) {
        let result = decode_advertisement(&advertisement(3264, payload));
        prop_assert_eq!(result.readings.len(), 7);
        prop_assert!(result.readings[6].value.is_some());
    }
}
