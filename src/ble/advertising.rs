//! Advertising data input.
//!
//! An [`Advertisement`] holds the manufacturer-specific data seen in one BLE
//! advertisement, keyed by 16-bit company identifier. It can be built from a
//! plain map or straight from `btleplug` peripheral properties.

use std::collections::HashMap;

use btleplug::api::PeripheralProperties;

/// One manufacturer payload, borrowed from an [`Advertisement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPayload<'a> {
    /// Company identifier the payload was keyed by.
    pub manufacturer_id: u16,
    /// Payload bytes, excluding the identifier.
    pub bytes: &'a [u8],
}

impl RawPayload<'_> {
    /// Length of the payload in bytes.
    pub fn declared_length(&self) -> usize {
        self.bytes.len()
    }

    /// First payload byte, used as message type by some devices.
    pub fn message_type(&self) -> Option<u8> {
        self.bytes.first().copied()
    }
}

/// Manufacturer data observed in a single advertisement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advertisement {
    /// Address of the advertising device, if known.
    pub address: Option<String>,
    /// Manufacturer payloads keyed by company identifier.
    pub manufacturer_data: HashMap<u16, Vec<u8>>,
}

impl Advertisement {
    /// Create an advertisement from a manufacturer data map.
    pub fn new(manufacturer_data: HashMap<u16, Vec<u8>>) -> Self {
        Self {
            address: None,
            manufacturer_data,
        }
    }

    /// Set the device address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Create an advertisement from `btleplug` peripheral properties.
    pub fn from_properties(properties: &PeripheralProperties) -> Self {
        Self {
            address: Some(properties.address.to_string()),
            manufacturer_data: properties.manufacturer_data.clone(),
        }
    }

    /// Get the payload for a manufacturer id.
    pub fn payload(&self, manufacturer_id: u16) -> Option<RawPayload<'_>> {
        self.manufacturer_data
            .get(&manufacturer_id)
            .map(|bytes| RawPayload {
                manufacturer_id,
                bytes,
            })
    }

    /// Check if the advertisement carries no manufacturer data.
    pub fn is_empty(&self) -> bool {
        self.manufacturer_data.is_empty()
    }
}

impl From<HashMap<u16, Vec<u8>>> for Advertisement {
    fn from(manufacturer_data: HashMap<u16, Vec<u8>>) -> Self {
        Self::new(manufacturer_data)
    }
}

impl From<&PeripheralProperties> for Advertisement {
    fn from(properties: &PeripheralProperties) -> Self {
        Self::from_properties(properties)
    }
}
