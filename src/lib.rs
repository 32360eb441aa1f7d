//! # garnet-chefiq-ble
//!
//! Decoders for the BLE advertisements of Garnet SeeLevel tank monitors and
//! Chef iQ wireless cooking probes.
//!
//! Both device families broadcast their telemetry in the manufacturer
//! specific data of their advertisements, so no connection is needed. This
//! crate turns those payloads into normalized [`Reading`]s.
//!
//! ## Supported Devices
//!
//! | Device           | Manufacturer id | Payloads                              |
//! |------------------|-----------------|---------------------------------------|
//! | Garnet 709-BTP3  | 305             | 14 bytes, one sensor per frame        |
//! | Garnet 709-BTP7  | 3264            | 14 bytes, six tanks and battery       |
//! | Chef iQ CQ60     | 1485            | 16/17/18 bytes, selected by type byte |
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use garnet_chefiq_ble::{Advertisement, DeviceModel, Dispatcher, SensorKind};
//!
//! // Chef iQ status frame carrying 87% battery
//! let mut status = vec![3, 0, 0, 0, 0, 0, 0, 0, 87];
//! status.extend_from_slice(&[0; 8]);
//!
//! let advertisement = Advertisement::new(HashMap::from([(1485, status)]));
//! let result = Dispatcher::new().decode(&advertisement);
//!
//! assert_eq!(result.model, Some(DeviceModel::ChefIqCq60));
//! assert_eq!(result.readings[0].kind, SensorKind::Battery);
//! assert_eq!(result.readings[0].value, Some(87.0));
//! ```
//!
//! Advertisements that match no known frame decode to an empty result; this
//! is the normal outcome for other devices and is never an error.
//!
//! ## Logging
//!
//! Decoders log through `tracing`: raw payloads at `trace`, skipped payloads,
//! boot frames and invalid fields at `debug`. The same information is
//! returned in [`DecodeResult::outcomes`].
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for readings and models

pub mod ble;
pub mod data;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod utils;

// Re-exports for convenience
pub use ble::{Advertisement, DeviceModel, RawPayload};
pub use data::{DeviceClass, Reading, SensorKind, Unit};
pub use dispatcher::{
    decode_advertisement, DecodeResult, DeviceProfile, Dispatcher, OutcomeStatus, ProfileOutcome,
};
pub use error::{Error, Result};
pub use protocol::{DecodeNote, Decoded, InvalidReason};
