//! Sentinel values meaning "no data".
//!
//! The two device families are unrelated and their sentinels are kept
//! separate.

use crate::error::Error;
use crate::protocol::layout::parse_ascii_int;

/// BTP3 value text reported while a tank sender is open.
pub const BTP3_OPEN: &str = "OPN";

/// BTP3 value text reported when no bus object answers for the sensor.
pub const BTP3_NO_BUS_OBJECT: &str = "NBO";

/// BTP3 sensor-type code broadcast while the monitor is booting.
pub const BTP3_BOOT_FRAME: u8 = 255;

/// BTP7 level byte for a tank that is not installed.
pub const BTP7_NOT_INSTALLED: u8 = 110;

/// BTP7 level byte for a faulty sender.
pub const BTP7_SENSOR_FAULT: u8 = 102;

/// Why a field was reported without a value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReason {
    /// A text sentinel such as `"OPN"`.
    Sentinel(String),
    /// Text that is neither a sentinel nor a number.
    Unparseable(String),
    /// A reserved fault code byte.
    FaultCode(u8),
}

/// Check whether a BTP3 sensor-type byte marks a boot frame.
pub fn is_btp3_boot_frame(sensor_type: u8) -> bool {
    sensor_type == BTP3_BOOT_FRAME
}

/// Validate and parse a BTP3 three-character value field.
pub fn btp3_value(raw: &str) -> Result<i32, InvalidReason> {
    if raw == BTP3_OPEN || raw == BTP3_NO_BUS_OBJECT {
        return Err(InvalidReason::Sentinel(raw.to_string()));
    }
    parse_ascii_int(raw).map_err(|err| match err {
        Error::FieldParse { raw } => InvalidReason::Unparseable(raw),
        _ => InvalidReason::Unparseable(raw.to_string()),
    })
}

/// Validate a BTP7 tank level byte.
pub fn btp7_level(raw: u8) -> Result<u8, InvalidReason> {
    match raw {
        BTP7_NOT_INSTALLED | BTP7_SENSOR_FAULT => Err(InvalidReason::FaultCode(raw)),
        level => Ok(level),
    }
}
