//! Manufacturer identifiers and device models.

use std::fmt;

use crate::utils::short_address;

/// Manufacturer id used by Garnet 709-BTP3 monitors.
pub const GARNET_BTP3_MANUFACTURER_ID: u16 = 305;

/// Manufacturer id used by Garnet 709-BTP7 monitors.
pub const GARNET_BTP7_MANUFACTURER_ID: u16 = 3264;

/// Manufacturer id used by Chef iQ probes.
pub const CHEF_IQ_MANUFACTURER_ID: u16 = 1485;

/// Device model recognized from an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceModel {
    /// Garnet SeeLevel 709-BTP3 (one sensor per advertisement).
    GarnetBtp3,
    /// Garnet SeeLevel 709-BTP7 (all tanks in one advertisement).
    GarnetBtp7,
    /// Chef iQ CQ60 wireless probe.
    ChefIqCq60,
}

impl DeviceModel {
    /// All known models, in dispatch order.
    pub const ALL: [DeviceModel; 3] = [Self::GarnetBtp3, Self::GarnetBtp7, Self::ChefIqCq60];

    /// Manufacturer id carrying this model's payload.
    pub fn manufacturer_id(&self) -> u16 {
        match self {
            Self::GarnetBtp3 => GARNET_BTP3_MANUFACTURER_ID,
            Self::GarnetBtp7 => GARNET_BTP7_MANUFACTURER_ID,
            Self::ChefIqCq60 => CHEF_IQ_MANUFACTURER_ID,
        }
    }

    /// Manufacturer name.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::GarnetBtp3 | Self::GarnetBtp7 => "Garnet",
            Self::ChefIqCq60 => "Chef iQ",
        }
    }

    /// Model string.
    pub fn model(&self) -> &'static str {
        match self {
            Self::GarnetBtp3 => "709-BTP3",
            Self::GarnetBtp7 => "709-BTP7",
            Self::ChefIqCq60 => "CQ60",
        }
    }

    /// Device title, `"<manufacturer> <model> <short address>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use garnet_chefiq_ble::DeviceModel;
    ///
    /// let title = DeviceModel::GarnetBtp7.title("C4:DE:E2:00:12:AB");
    /// assert_eq!(title, "Garnet 709-BTP7 12AB");
    /// ```
    pub fn title(&self, address: &str) -> String {
        format!(
            "{} {} {}",
            self.manufacturer(),
            self.model(),
            short_address(address)
        )
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.manufacturer(), self.model())
    }
}
