//! Normalized sensor readings.
//!
//! Every decoder, whatever the device family, produces [`Reading`]s keyed by
//! a [`SensorKind`]. Consumers never need to know which protocol a reading
//! came from.

use std::borrow::Cow;
use std::fmt;

/// Telemetry channel reported by a device.
///
/// Tank levels and battery are shared between the Garnet generations; the
/// temperature channels are shared between Garnet and Chef iQ where the
/// string keys coincide (`temp_2`, `temp_3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorKind {
    /// Fresh water tank.
    FreshTank,
    /// Second fresh water tank.
    FreshTank2,
    /// Black water tank.
    BlackTank,
    /// Second black water tank.
    BlackTank2,
    /// Grey water tank.
    GreyTank,
    /// Second grey water tank.
    GreyTank2,
    /// Third grey water tank. Reserved; no current decoder emits it.
    GreyTank3,
    /// LPG tank.
    LpgTank,
    /// Second LPG tank.
    LpgTank2,
    /// Galley tank.
    GalleyTank,
    /// Second galley tank.
    GalleyTank2,
    /// Chemical tank.
    ChemicalTank,
    /// Second chemical tank.
    ChemicalTank2,
    /// First Garnet temperature input.
    Temp,
    /// Chef iQ probe sensor 1.
    Temp1,
    /// Garnet temperature input 2 / Chef iQ probe sensor 2.
    Temp2,
    /// Garnet temperature input 3 / Chef iQ probe sensor 3.
    Temp3,
    /// Garnet temperature input 4.
    Temp4,
    /// Chef iQ meat (core) temperature.
    TempMeat,
    /// Chef iQ probe tip temperature.
    TempTip,
    /// Chef iQ ambient temperature.
    TempAmbient,
    /// Battery voltage (Garnet) or charge percentage (Chef iQ).
    Battery,
    /// A Garnet sensor-type code outside the known table.
    Unknown(u8),
}

impl SensorKind {
    /// Stable string key for this channel.
    pub fn key(&self) -> Cow<'static, str> {
        let key = match self {
            Self::FreshTank => "fresh_tank",
            Self::FreshTank2 => "fresh_tank2",
            Self::BlackTank => "black_tank",
            Self::BlackTank2 => "black_tank2",
            Self::GreyTank => "grey_tank",
            Self::GreyTank2 => "grey_tank2",
            Self::GreyTank3 => "grey_tank3",
            Self::LpgTank => "lpg_tank",
            Self::LpgTank2 => "lpg_2_tank",
            Self::GalleyTank => "galley_tank",
            Self::GalleyTank2 => "galley_2_tank",
            Self::ChemicalTank => "chemical_tank",
            Self::ChemicalTank2 => "chemical_2_tank",
            Self::Temp => "temp",
            Self::Temp1 => "temp_1",
            Self::Temp2 => "temp_2",
            Self::Temp3 => "temp_3",
            Self::Temp4 => "temp_4",
            Self::TempMeat => "temp_meat",
            Self::TempTip => "temp_tip",
            Self::TempAmbient => "temp_ambient",
            Self::Battery => "battery",
            Self::Unknown(code) => return Cow::Owned(format!("unknown_{code}")),
        };
        Cow::Borrowed(key)
    }

    /// Human-readable label.
    pub fn name(&self) -> Cow<'static, str> {
        let name = match self {
            Self::FreshTank => "Fresh Tank",
            Self::FreshTank2 => "Fresh Tank 2",
            Self::BlackTank => "Black Tank",
            Self::BlackTank2 => "Black Tank 2",
            Self::GreyTank => "Grey Tank",
            Self::GreyTank2 => "Grey Tank 2",
            Self::GreyTank3 => "Grey Tank 3",
            Self::LpgTank => "LPG Tank",
            Self::LpgTank2 => "LPG Tank 2",
            Self::GalleyTank => "Galley Tank",
            Self::GalleyTank2 => "Galley Tank 2",
            Self::ChemicalTank => "Chemical Tank",
            Self::ChemicalTank2 => "Chemical Tank 2",
            Self::Temp => "Temperature",
            Self::Temp1 => "Temperature 1",
            Self::Temp2 => "Temperature 2",
            Self::Temp3 => "Temperature 3",
            Self::Temp4 => "Temperature 4",
            Self::TempMeat => "Meat Temperature",
            Self::TempTip => "Tip Temperature",
            Self::TempAmbient => "Ambient Temperature",
            Self::Battery => "Battery",
            Self::Unknown(code) => return Cow::Owned(format!("Unknown Sensor {code}")),
        };
        Cow::Borrowed(name)
    }

    /// Check if this is a tank level channel.
    pub fn is_tank(&self) -> bool {
        matches!(
            self,
            Self::FreshTank
                | Self::FreshTank2
                | Self::BlackTank
                | Self::BlackTank2
                | Self::GreyTank
                | Self::GreyTank2
                | Self::GreyTank3
                | Self::LpgTank
                | Self::LpgTank2
                | Self::GalleyTank
                | Self::GalleyTank2
                | Self::ChemicalTank
                | Self::ChemicalTank2
        )
    }

    /// Check if this is a temperature channel.
    pub fn is_temperature(&self) -> bool {
        matches!(
            self,
            Self::Temp
                | Self::Temp1
                | Self::Temp2
                | Self::Temp3
                | Self::Temp4
                | Self::TempMeat
                | Self::TempTip
                | Self::TempAmbient
        )
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Unit of measurement attached to a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    /// Fill level percentage.
    Percent,
    /// Volts.
    Volt,
    /// Degrees Celsius.
    DegreeCelsius,
    /// Battery charge percentage.
    PercentBattery,
}

impl Unit {
    /// Display symbol for the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Percent | Self::PercentBattery => "%",
            Self::Volt => "V",
            Self::DegreeCelsius => "°C",
        }
    }
}

/// Classification hint for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    /// No particular class.
    #[default]
    None,
    /// Temperature sensor.
    Temperature,
    /// Voltage sensor.
    Voltage,
    /// Battery charge sensor.
    Battery,
}

/// One decoded telemetry data point.
///
/// `value` is `None` when the channel is present but its data is currently
/// invalid. A channel that was not reported at all produces no `Reading`.
///
/// The constructors fix the unit and device class for each kind of
/// measurement; decoders only build readings through them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Channel this reading belongs to.
    pub kind: SensorKind,
    /// Measured value, or `None` when unavailable.
    pub value: Option<f64>,
    /// Unit of `value`.
    pub unit: Unit,
    /// Classification hint.
    pub device_class: DeviceClass,
}

impl Reading {
    /// A fill level in percent.
    pub fn percent(kind: SensorKind, value: Option<f64>) -> Self {
        Self {
            kind,
            value,
            unit: Unit::Percent,
            device_class: DeviceClass::None,
        }
    }

    /// A temperature in degrees Celsius.
    pub fn temperature(kind: SensorKind, value: Option<f64>) -> Self {
        Self {
            kind,
            value,
            unit: Unit::DegreeCelsius,
            device_class: DeviceClass::Temperature,
        }
    }

    /// A battery voltage.
    pub fn voltage(value: Option<f64>) -> Self {
        Self {
            kind: SensorKind::Battery,
            value,
            unit: Unit::Volt,
            device_class: DeviceClass::Voltage,
        }
    }

    /// A battery charge percentage.
    pub fn battery_percent(value: Option<f64>) -> Self {
        Self {
            kind: SensorKind::Battery,
            value,
            unit: Unit::PercentBattery,
            device_class: DeviceClass::Battery,
        }
    }

    /// Check if the reading carries a value.
    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}: {}{}", self.kind, value, self.unit.symbol()),
            None => write!(f, "{}: unavailable", self.kind),
        }
    }
}
