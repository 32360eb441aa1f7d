//! Chef iQ CQ60 frame decoding.
//!
//! The probe multiplexes several frames over one manufacturer id. Byte 0 is
//! the message type and, together with the payload length, selects the
//! layout:
//!
//! | Type | Length | Frame     | Readings                   |
//! |------|--------|-----------|----------------------------|
//! | 0    | 16     | Name      | none                       |
//! | 1    | 18     | Telemetry | six temperatures           |
//! | 3    | 17     | Status    | battery percentage         |
//!
//! Any other combination is not a Chef iQ frame this crate understands and
//! is ignored.

use tracing::{debug, trace};

use super::layout::{Field, Layout};
use super::{match_frame, DecodeNote, Decoded, FrameProfile};
use crate::data::{Reading, SensorKind};
use crate::error::Result;

/// Message type of a name frame.
pub const NAME_MESSAGE: u8 = 0;
/// Message type of a telemetry frame.
pub const TELEMETRY_MESSAGE: u8 = 1;
/// Message type of a status frame.
pub const STATUS_MESSAGE: u8 = 3;

/// Name frame layout: type, padding, 12-byte name, trailing u16.
pub const NAME_LAYOUT: Layout =
    Layout::new(&[Field::U8, Field::Pad(1), Field::Ascii(12), Field::U16Le]);

/// Telemetry frame layout.
///
/// - Byte 0: Message type
/// - Byte 1: Padding
/// - Bytes 2-3: Probe sensor 3 (tenths of °C)
/// - Bytes 4-5: Meat temperature
/// - Bytes 6-7: Tip temperature
/// - Bytes 8-9: Probe sensor 1
/// - Bytes 10-11: Probe sensor 2
/// - Bytes 12-13: Padding
/// - Bytes 14-15: Ambient temperature
/// - Bytes 16-17: Padding
pub const TELEMETRY_LAYOUT: Layout = Layout::new(&[
    Field::U8,
    Field::Pad(1),
    Field::U16Le,
    Field::U16Le,
    Field::U16Le,
    Field::U16Le,
    Field::U16Le,
    Field::Pad(2),
    Field::U16Le,
    Field::Pad(2),
]);

/// Status frame layout: type, seven unused bytes, battery percentage, six
/// unused bytes, trailing u16.
pub const STATUS_LAYOUT: Layout = Layout::new(&[
    Field::U8,
    Field::Pad(7),
    Field::U8,
    Field::Pad(6),
    Field::U16Le,
]);

/// Frames accepted from a Chef iQ probe.
pub const FRAMES: &[FrameProfile] = &[
    FrameProfile {
        length: NAME_LAYOUT.size(),
        message_type: Some(NAME_MESSAGE),
        decode: decode_name,
    },
    FrameProfile {
        length: TELEMETRY_LAYOUT.size(),
        message_type: Some(TELEMETRY_MESSAGE),
        decode: decode_telemetry,
    },
    FrameProfile {
        length: STATUS_LAYOUT.size(),
        message_type: Some(STATUS_MESSAGE),
        decode: decode_status,
    },
];

/// Temperature channels of the telemetry frame, by field index.
const TEMPERATURES: [(SensorKind, usize); 6] = [
    (SensorKind::Temp3, 2),
    (SensorKind::TempMeat, 3),
    (SensorKind::TempTip, 4),
    (SensorKind::Temp1, 5),
    (SensorKind::Temp2, 6),
    (SensorKind::TempAmbient, 8),
];

const NAME: usize = 2;
const BATTERY: usize = 2;

/// Decode any Chef iQ payload.
///
/// Payloads that match none of the known frames produce an empty result.
///
/// # Errors
///
/// Only fails if a matched frame cannot be decoded, which cannot happen for
/// a payload whose length was already checked.
pub fn decode(data: &[u8]) -> Result<Decoded> {
    match match_frame(FRAMES, data) {
        Some(frame) => (frame.decode)(data),
        None => {
            debug!(
                "Ignoring Chef iQ payload: type {:?}, {} bytes",
                data.first(),
                data.len()
            );
            Ok(Decoded::empty())
        }
    }
}

/// Decode a name frame.
///
/// The name is reported as a note only; it never becomes a reading.
pub fn decode_name(data: &[u8]) -> Result<Decoded> {
    trace!("Decoding Chef iQ name frame: {:02X?}", data);

    let fields = NAME_LAYOUT.decode(data)?;
    let name = fields
        .text(NAME)?
        .trim_end_matches('\0')
        .trim()
        .to_string();
    debug!("Chef iQ name frame: {:?}", name);

    Ok(Decoded::note(DecodeNote::NameFrame { name }))
}

/// Decode a telemetry frame into six temperatures in °C.
///
/// Raw values are tenths of a degree. No value is treated as invalid.
pub fn decode_telemetry(data: &[u8]) -> Result<Decoded> {
    trace!("Decoding Chef iQ telemetry frame: {:02X?}", data);

    let fields = TELEMETRY_LAYOUT.decode(data)?;
    let mut readings = Vec::with_capacity(TEMPERATURES.len());
    for (kind, index) in TEMPERATURES {
        let raw = fields.uint(index)?;
        readings.push(Reading::temperature(kind, Some(f64::from(raw) / 10.0)));
    }

    Ok(Decoded {
        readings,
        notes: Vec::new(),
    })
}

/// Decode a status frame into the battery percentage.
pub fn decode_status(data: &[u8]) -> Result<Decoded> {
    trace!("Decoding Chef iQ status frame: {:02X?}", data);

    let fields = STATUS_LAYOUT.decode(data)?;
    let battery = fields.byte(BATTERY)?;

    Ok(Decoded {
        readings: vec![Reading::battery_percent(Some(f64::from(battery)))],
        notes: Vec::new(),
    })
}
