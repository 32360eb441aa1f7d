//! Manufacturer dispatcher.
//!
//! Routes each manufacturer payload of an advertisement to the decoder for
//! its device model and gathers the readings. Payloads that do not fit any
//! known frame are skipped, never reported as failures: scanners see plenty
//! of partial advertisements and unrelated firmware states.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::ble::{Advertisement, DeviceModel};
use crate::data::Reading;
use crate::error::Error;
use crate::protocol::{
    chef_iq, garnet_btp3, garnet_btp7, match_frame, DecodeNote, FrameProfile,
};

/// Frames accepted for one device model.
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    /// Model the frames belong to.
    pub model: DeviceModel,
    /// Manufacturer id carrying the payload.
    pub manufacturer_id: u16,
    /// Accepted frame layouts.
    pub frames: &'static [FrameProfile],
}

/// Profiles of every supported device, in dispatch order.
pub static PROFILES: [DeviceProfile; 3] = [
    DeviceProfile {
        model: DeviceModel::GarnetBtp3,
        manufacturer_id: crate::ble::GARNET_BTP3_MANUFACTURER_ID,
        frames: garnet_btp3::FRAMES,
    },
    DeviceProfile {
        model: DeviceModel::GarnetBtp7,
        manufacturer_id: crate::ble::GARNET_BTP7_MANUFACTURER_ID,
        frames: garnet_btp7::FRAMES,
    },
    DeviceProfile {
        model: DeviceModel::ChefIqCq60,
        manufacturer_id: crate::ble::CHEF_IQ_MANUFACTURER_ID,
        frames: chef_iq::FRAMES,
    },
];

impl DeviceProfile {
    /// Get the profile for a model.
    pub fn for_model(model: DeviceModel) -> &'static DeviceProfile {
        match model {
            DeviceModel::GarnetBtp3 => &PROFILES[0],
            DeviceModel::GarnetBtp7 => &PROFILES[1],
            DeviceModel::ChefIqCq60 => &PROFILES[2],
        }
    }
}

/// What happened to one manufacturer payload.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeStatus {
    /// The payload was decoded.
    Decoded {
        /// Number of readings produced.
        readings: usize,
        /// Notes from the decoder.
        notes: Vec<DecodeNote>,
    },
    /// No frame of the profile matched the payload.
    Unmatched {
        /// Payload length.
        length: usize,
        /// First payload byte.
        message_type: Option<u8>,
    },
    /// A frame matched but decoding failed.
    Failed(Error),
}

/// Outcome for one manufacturer payload present in the advertisement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOutcome {
    /// Model the payload was routed to.
    pub model: DeviceModel,
    /// Manufacturer id of the payload.
    pub manufacturer_id: u16,
    /// What happened.
    pub status: OutcomeStatus,
}

impl ProfileOutcome {
    /// Check if the payload was decoded.
    pub fn is_decoded(&self) -> bool {
        matches!(self.status, OutcomeStatus::Decoded { .. })
    }
}

/// Readings decoded from one advertisement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeResult {
    /// Model of the last decoder that matched, if any.
    pub model: Option<DeviceModel>,
    /// Readings in decoder invocation order.
    pub readings: Vec<Reading>,
    /// One outcome per known manufacturer id present in the advertisement.
    pub outcomes: Vec<ProfileOutcome>,
}

impl DecodeResult {
    /// Check if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
    }

    /// Device title for the matched model, if any.
    pub fn title(&self, address: &str) -> Option<String> {
        self.model.map(|model| model.title(address))
    }

    /// Notes from every decoded payload.
    pub fn notes(&self) -> impl Iterator<Item = &DecodeNote> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match &outcome.status {
                OutcomeStatus::Decoded { notes, .. } => Some(notes),
                _ => None,
            })
            .flatten()
    }
}

/// Routes advertisements to device decoders.
///
/// A dispatcher holds no state besides the set of enabled profiles, so one
/// instance can decode advertisements from any number of devices, from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    profiles: Vec<&'static DeviceProfile>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            profiles: PROFILES.iter().collect(),
        }
    }
}

impl Dispatcher {
    /// Create a dispatcher for every supported device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher for a subset of devices.
    ///
    /// Profiles are always tried in the order of [`PROFILES`], whatever the
    /// order of `models`.
    pub fn with_models(models: &[DeviceModel]) -> Self {
        Self {
            profiles: PROFILES
                .iter()
                .filter(|profile| models.contains(&profile.model))
                .collect(),
        }
    }

    /// Models this dispatcher decodes.
    pub fn models(&self) -> impl Iterator<Item = DeviceModel> + '_ {
        self.profiles.iter().map(|profile| profile.model)
    }

    /// Decode every known manufacturer payload in an advertisement.
    pub fn decode(&self, advertisement: &Advertisement) -> DecodeResult {
        let mut result = DecodeResult::default();

        for profile in &self.profiles {
            let Some(payload) = advertisement.payload(profile.manufacturer_id) else {
                continue;
            };

            trace!(
                "{} payload ({} bytes): {:02X?}",
                profile.model,
                payload.declared_length(),
                payload.bytes
            );

            let status = match match_frame(profile.frames, payload.bytes) {
                None => {
                    debug!(
                        "Skipping {} payload: no frame for type {:?} with {} bytes",
                        profile.model,
                        payload.message_type(),
                        payload.declared_length()
                    );
                    OutcomeStatus::Unmatched {
                        length: payload.declared_length(),
                        message_type: payload.message_type(),
                    }
                }
                Some(frame) => match (frame.decode)(payload.bytes) {
                    Ok(decoded) => {
                        result.model = Some(profile.model);
                        let count = decoded.readings.len();
                        result.readings.extend(decoded.readings);
                        OutcomeStatus::Decoded {
                            readings: count,
                            notes: decoded.notes,
                        }
                    }
                    Err(err) => {
                        debug!("Skipping {} payload: {}", profile.model, err);
                        OutcomeStatus::Failed(err)
                    }
                },
            };

            result.outcomes.push(ProfileOutcome {
                model: profile.model,
                manufacturer_id: profile.manufacturer_id,
                status,
            });
        }

        result
    }

    /// Decode a manufacturer data map.
    pub fn decode_manufacturer_data(
        &self,
        manufacturer_data: &HashMap<u16, Vec<u8>>,
    ) -> DecodeResult {
        self.decode(&Advertisement::new(manufacturer_data.clone()))
    }
}

/// Decode an advertisement with every supported device enabled.
pub fn decode_advertisement(advertisement: &Advertisement) -> DecodeResult {
    Dispatcher::new().decode(advertisement)
}
