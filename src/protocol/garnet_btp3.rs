//! Garnet 709-BTP3 frame decoding.
//!
//! A BTP3 monitor broadcasts one sensor per advertisement. The 14-byte
//! payload is:
//! - Bytes 0-2: Coach identifier (u24 little-endian)
//! - Byte 3: Sensor type code
//! - Bytes 4-6: Sensor value (ASCII digits)
//! - Bytes 7-9: Volume (ASCII, unused)
//! - Bytes 10-12: Total (ASCII, unused)
//! - Byte 13: Alarm flag (unused)

use tracing::{debug, trace};

use super::layout::{Field, Layout};
use super::sentinel::{btp3_value, is_btp3_boot_frame};
use super::{DecodeNote, Decoded, FrameProfile};
use crate::data::{Reading, SensorKind};
use crate::error::Result;
use crate::utils::round_to;

/// Frame layout.
pub const LAYOUT: Layout = Layout::new(&[
    Field::U24Le,
    Field::U8,
    Field::Ascii(3),
    Field::Ascii(3),
    Field::Ascii(3),
    Field::U8,
]);

/// Payload length of a BTP3 frame.
pub const PAYLOAD_LEN: usize = LAYOUT.size();

/// Frames accepted from a BTP3 monitor.
pub const FRAMES: &[FrameProfile] = &[FrameProfile {
    length: PAYLOAD_LEN,
    message_type: None,
    decode,
}];

const COACH_ID: usize = 0;
const SENSOR_TYPE: usize = 1;
const SENSOR_VALUE: usize = 2;

/// Sensor type code for the battery voltage (in tenths of a volt).
pub const BATTERY_SENSOR_TYPE: u8 = 13;

/// Map a BTP3 sensor type code to its channel.
///
/// Codes outside the table are kept as [`SensorKind::Unknown`].
pub fn sensor_kind(sensor_type: u8) -> SensorKind {
    match sensor_type {
        0 => SensorKind::FreshTank,
        1 => SensorKind::BlackTank,
        2 => SensorKind::GreyTank,
        3 => SensorKind::LpgTank,
        4 => SensorKind::LpgTank2,
        5 => SensorKind::GalleyTank,
        6 => SensorKind::GalleyTank2,
        7 => SensorKind::Temp,
        8 => SensorKind::Temp2,
        9 => SensorKind::Temp3,
        10 => SensorKind::Temp4,
        11 => SensorKind::ChemicalTank,
        12 => SensorKind::ChemicalTank2,
        BATTERY_SENSOR_TYPE => SensorKind::Battery,
        other => SensorKind::Unknown(other),
    }
}

/// Decode a BTP3 frame.
///
/// Yields exactly one reading, or none for a boot frame. Temperatures are
/// whole degrees; the battery is reported in tenths of a volt.
///
/// # Errors
///
/// Returns [`Error::Layout`](crate::Error::Layout) if `data` is not 14 bytes.
pub fn decode(data: &[u8]) -> Result<Decoded> {
    trace!("Decoding BTP3 frame: {:02X?}", data);

    let fields = LAYOUT.decode(data)?;
    let coach_id = fields.uint(COACH_ID)?;
    let sensor_type = fields.byte(SENSOR_TYPE)?;
    let raw_value = fields.text(SENSOR_VALUE)?;

    trace!(
        "BTP3 coach_id {} sensor_type {} value {:?}",
        coach_id,
        sensor_type,
        raw_value
    );

    if is_btp3_boot_frame(sensor_type) {
        debug!("BTP3 monitor is booting, skipping frame");
        return Ok(Decoded::note(DecodeNote::BootFrame));
    }

    let kind = sensor_kind(sensor_type);
    let value = btp3_value(raw_value);

    let mut decoded = Decoded::empty();
    match sensor_type {
        BATTERY_SENSOR_TYPE => decoded.push_checked(kind, value, |v| {
            Reading::voltage(v.map(|v| round_to(f64::from(v) / 10.0, 2)))
        }),
        7..=10 => decoded.push_checked(kind, value, |v| {
            Reading::temperature(kind, v.map(f64::from))
        }),
        _ => decoded.push_checked(kind, value, |v| Reading::percent(kind, v.map(f64::from))),
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DeviceClass, Unit};
    use crate::error::Error;
    use crate::protocol::sentinel::InvalidReason;
    use pretty_assertions::assert_eq;

    fn frame(sensor_type: u8, value: &[u8; 3]) -> Vec<u8> {
        let mut data = vec![0x01, 0x02, 0x03, sensor_type];
        data.extend_from_slice(value);
        data.extend_from_slice(b"000");
        data.extend_from_slice(b"100");
        data.push(0);
        data
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(PAYLOAD_LEN, 14);
        assert_eq!(frame(0, b"050").len(), PAYLOAD_LEN);
    }

    #[test]
    fn test_sensor_kind_table() {
        assert_eq!(sensor_kind(0), SensorKind::FreshTank);
        assert_eq!(sensor_kind(1), SensorKind::BlackTank);
        assert_eq!(sensor_kind(2), SensorKind::GreyTank);
        assert_eq!(sensor_kind(4), SensorKind::LpgTank2);
        assert_eq!(sensor_kind(6), SensorKind::GalleyTank2);
        assert_eq!(sensor_kind(7), SensorKind::Temp);
        assert_eq!(sensor_kind(10), SensorKind::Temp4);
        assert_eq!(sensor_kind(12), SensorKind::ChemicalTank2);
        assert_eq!(sensor_kind(13), SensorKind::Battery);
        assert_eq!(sensor_kind(14), SensorKind::Unknown(14));
    }

    #[test]
    fn test_decode_battery() {
        let decoded = decode(&frame(13, b"123")).unwrap();
        assert_eq!(decoded.readings, vec![Reading::voltage(Some(12.3))]);
        assert!(decoded.notes.is_empty());
    }

    #[test]
    fn test_decode_temperature_unscaled() {
        let decoded = decode(&frame(7, b"205")).unwrap();
        assert_eq!(decoded.readings.len(), 1);
        let reading = &decoded.readings[0];
        assert_eq!(reading.kind, SensorKind::Temp);
        assert_eq!(reading.value, Some(205.0));
        assert_eq!(reading.unit, Unit::DegreeCelsius);
        assert_eq!(reading.device_class, DeviceClass::Temperature);
    }

    #[test]
    fn test_decode_tank_level() {
        let decoded = decode(&frame(3, b"075")).unwrap();
        assert_eq!(
            decoded.readings,
            vec![Reading::percent(SensorKind::LpgTank, Some(75.0))]
        );
    }

    #[test]
    fn test_decode_boot_frame() {
        let decoded = decode(&frame(255, b"123")).unwrap();
        assert!(decoded.readings.is_empty());
        assert_eq!(decoded.notes, vec![DecodeNote::BootFrame]);
    }

    #[test]
    fn test_decode_sentinels() {
        for sentinel in [b"OPN", b"NBO"] {
            let decoded = decode(&frame(1, sentinel)).unwrap();
            assert_eq!(
                decoded.readings,
                vec![Reading::percent(SensorKind::BlackTank, None)]
            );
            assert!(matches!(
                decoded.notes.as_slice(),
                [DecodeNote::InvalidField {
                    kind: SensorKind::BlackTank,
                    reason: InvalidReason::Sentinel(_),
                }]
            ));
        }
    }

    #[test]
    fn test_decode_unparseable_battery() {
        let decoded = decode(&frame(13, b"?!?")).unwrap();
        assert_eq!(decoded.readings, vec![Reading::voltage(None)]);
        assert_eq!(
            decoded.notes,
            vec![DecodeNote::InvalidField {
                kind: SensorKind::Battery,
                reason: InvalidReason::Unparseable("?!?".to_string()),
            }]
        );
    }

    #[test]
    fn test_decode_unknown_type() {
        let decoded = decode(&frame(42, b"010")).unwrap();
        assert_eq!(
            decoded.readings,
            vec![Reading::percent(SensorKind::Unknown(42), Some(10.0))]
        );
    }

    #[test]
    fn test_decode_wrong_length() {
        let mut data = frame(0, b"050");
        data.pop();
        assert_eq!(
            decode(&data).unwrap_err(),
            Error::Layout {
                expected: 14,
                actual: 13
            }
        );
    }
}
