//! Garnet 709-BTP7 frame decoding.
//!
//! A BTP7 monitor reports every tank in one 14-byte payload:
//! - Bytes 0-1: Coach identifier (u16 little-endian)
//! - Byte 2: Padding
//! - Bytes 3-8: Fresh 1, Grey 1, Black 1, Fresh 2, Grey 2, Black 2 (percent)
//! - Bytes 9-10: Unknown
//! - Byte 11: Battery voltage (tenths of a volt)
//! - Bytes 12-13: Unknown
//!
//! The unknown bytes are decoded so the layout stays exact but have no
//! known meaning and are never reported.

use tracing::trace;

use super::layout::{Field, Layout};
use super::sentinel::btp7_level;
use super::{Decoded, FrameProfile};
use crate::data::{Reading, SensorKind};
use crate::error::Result;
use crate::utils::round_to;

/// Frame layout.
pub const LAYOUT: Layout = Layout::new(&[
    Field::U16Le,
    Field::Pad(1),
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
    Field::U8,
]);

/// Payload length of a BTP7 frame.
pub const PAYLOAD_LEN: usize = LAYOUT.size();

/// Frames accepted from a BTP7 monitor.
pub const FRAMES: &[FrameProfile] = &[FrameProfile {
    length: PAYLOAD_LEN,
    message_type: None,
    decode,
}];

const COACH_ID: usize = 0;
const FRESH_1: usize = 2;
const GREY_1: usize = 3;
const BLACK_1: usize = 4;
const FRESH_2: usize = 5;
const GREY_2: usize = 6;
const BLACK_2: usize = 7;
const VOLTAGE: usize = 10;

/// Tank channels in the order they are reported.
const TANKS: [(SensorKind, usize); 6] = [
    (SensorKind::GreyTank, GREY_1),
    (SensorKind::GreyTank2, GREY_2),
    (SensorKind::FreshTank, FRESH_1),
    (SensorKind::FreshTank2, FRESH_2),
    (SensorKind::BlackTank, BLACK_1),
    (SensorKind::BlackTank2, BLACK_2),
];

/// Decode a BTP7 frame.
///
/// Yields six tank readings followed by the battery voltage. A tank whose
/// byte is a fault code is still reported, without a value.
///
/// # Errors
///
/// Returns [`Error::Layout`](crate::Error::Layout) if `data` is not 14 bytes.
pub fn decode(data: &[u8]) -> Result<Decoded> {
    trace!("Decoding BTP7 frame: {:02X?}", data);

    let fields = LAYOUT.decode(data)?;
    trace!(
        "BTP7 coach_id {} voltage {}",
        fields.uint(COACH_ID)?,
        fields.uint(VOLTAGE)?
    );

    let mut decoded = Decoded::empty();
    for (kind, index) in TANKS {
        let level = btp7_level(fields.byte(index)?);
        decoded.push_checked(kind, level, |v| Reading::percent(kind, v.map(f64::from)));
    }

    let voltage = f64::from(fields.byte(VOLTAGE)?) / 10.0;
    decoded.readings.push(Reading::voltage(Some(round_to(voltage, 2))));

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Unit;
    use crate::protocol::sentinel::InvalidReason;
    use crate::protocol::DecodeNote;
    use pretty_assertions::assert_eq;

    /// Build a frame from the six tank bytes and the voltage byte.
    fn frame(tanks: [u8; 6], voltage: u8) -> Vec<u8> {
        let [fresh1, grey1, black1, fresh2, grey2, black2] = tanks;
        vec![
            0x34, 0x12, 0x00, fresh1, grey1, black1, fresh2, grey2, black2, 0xEE, 0xEE, voltage,
            0xEE, 0xEE,
        ]
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(PAYLOAD_LEN, 14);
    }

    #[test]
    fn test_decode_all_channels() {
        let decoded = decode(&frame([10, 20, 30, 40, 50, 60], 131)).unwrap();
        assert_eq!(
            decoded.readings,
            vec![
                Reading::percent(SensorKind::GreyTank, Some(20.0)),
                Reading::percent(SensorKind::GreyTank2, Some(50.0)),
                Reading::percent(SensorKind::FreshTank, Some(10.0)),
                Reading::percent(SensorKind::FreshTank2, Some(40.0)),
                Reading::percent(SensorKind::BlackTank, Some(30.0)),
                Reading::percent(SensorKind::BlackTank2, Some(60.0)),
                Reading::voltage(Some(13.1)),
            ]
        );
        assert!(decoded.notes.is_empty());
    }

    #[test]
    fn test_decode_fault_codes() {
        let decoded = decode(&frame([0, 110, 0, 102, 50, 0], 125)).unwrap();
        assert_eq!(decoded.readings.len(), 7);

        let grey = &decoded.readings[0];
        assert_eq!(grey.kind, SensorKind::GreyTank);
        assert_eq!(grey.value, None);
        assert_eq!(grey.unit, Unit::Percent);

        assert_eq!(
            decoded.readings[1],
            Reading::percent(SensorKind::GreyTank2, Some(50.0))
        );
        assert_eq!(
            decoded.readings[3],
            Reading::percent(SensorKind::FreshTank2, None)
        );
        assert_eq!(
            decoded.notes,
            vec![
                DecodeNote::InvalidField {
                    kind: SensorKind::GreyTank,
                    reason: InvalidReason::FaultCode(110),
                },
                DecodeNote::InvalidField {
                    kind: SensorKind::FreshTank2,
                    reason: InvalidReason::FaultCode(102),
                },
            ]
        );
    }

    #[test]
    fn test_battery_never_suppressed() {
        let decoded = decode(&frame([0; 6], 110)).unwrap();
        assert_eq!(decoded.readings[6], Reading::voltage(Some(11.0)));
    }

    #[test]
    fn test_decode_wrong_length() {
        assert!(decode(&[0u8; 13]).is_err());
        assert!(decode(&[0u8; 15]).is_err());
    }
}
