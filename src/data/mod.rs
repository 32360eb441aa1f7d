//! Data structures for decoded sensor data.
//!
//! This module contains the normalized reading model shared by every
//! device decoder.

pub mod reading;

pub use reading::{DeviceClass, Reading, SensorKind, Unit};
