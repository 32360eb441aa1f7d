//! Protocol module for decoding manufacturer advertisement payloads.
//!
//! This module contains the implementations for:
//! - Fixed-width field layouts
//! - Sentinel ("no data") rules
//! - Garnet BTP3 and BTP7 tank monitor frames
//! - Chef iQ probe frames
//!
//! Every decoder has the same shape, a [`DecodeFn`] from payload bytes to
//! [`Decoded`]. Decoders are pure and keep no state between calls.

pub mod chef_iq;
pub mod garnet_btp3;
pub mod garnet_btp7;
pub mod layout;
pub mod sentinel;

pub use layout::{DecodedFields, Field, FieldValue, Layout};
pub use sentinel::InvalidReason;

use crate::data::{Reading, SensorKind};
use crate::error::Result;

/// Decoder for one frame layout.
pub type DecodeFn = fn(&[u8]) -> Result<Decoded>;

/// Something noteworthy that happened while decoding a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodeNote {
    /// The device is booting; the frame carries no readings.
    BootFrame,
    /// A channel was reported without a value.
    InvalidField {
        /// Channel the field belongs to.
        kind: SensorKind,
        /// Why the value is absent.
        reason: InvalidReason,
    },
    /// A device name frame was seen and discarded.
    NameFrame {
        /// Name carried by the frame.
        name: String,
    },
}

/// Readings and notes produced from one payload.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded {
    /// Readings in decode order.
    pub readings: Vec<Reading>,
    /// Notes about discarded frames and invalid fields.
    pub notes: Vec<DecodeNote>,
}

impl Decoded {
    /// A result with no readings and no notes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A result with a single note and no readings.
    pub fn note(note: DecodeNote) -> Self {
        Self {
            readings: Vec::new(),
            notes: vec![note],
        }
    }

    /// Record a reading whose value may be invalid.
    ///
    /// An invalid value still yields a reading, with `value: None`, and a
    /// matching [`DecodeNote::InvalidField`].
    pub(crate) fn push_checked<T>(
        &mut self,
        kind: SensorKind,
        checked: std::result::Result<T, InvalidReason>,
        make: impl FnOnce(Option<T>) -> Reading,
    ) {
        match checked {
            Ok(value) => self.readings.push(make(Some(value))),
            Err(reason) => {
                tracing::debug!("Sensor {} has no data: {:?}", kind, reason);
                self.notes.push(DecodeNote::InvalidField { kind, reason });
                self.readings.push(make(None));
            }
        }
    }
}

/// Applicability of a decoder to a payload.
///
/// A frame applies when the payload has exactly `length` bytes and, if a
/// `message_type` is given, its first byte equals it.
#[derive(Debug, Clone, Copy)]
pub struct FrameProfile {
    /// Required payload length in bytes.
    pub length: usize,
    /// Required value of the first payload byte, if any.
    pub message_type: Option<u8>,
    /// Decoder to run when the frame applies.
    pub decode: DecodeFn,
}

impl FrameProfile {
    /// Check if this frame applies to `data`.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() != self.length {
            return false;
        }
        match self.message_type {
            Some(message_type) => data.first() == Some(&message_type),
            None => true,
        }
    }
}

/// Find the frame profile applying to `data`.
pub fn match_frame<'a>(frames: &'a [FrameProfile], data: &[u8]) -> Option<&'a FrameProfile> {
    frames.iter().find(|frame| frame.matches(data))
}
