//! BLE advertisement input.
//!
//! This module describes what arrives from a Bluetooth scanner: manufacturer
//! payloads keyed by company id, and the device models those ids stand for.

pub mod advertising;
pub mod manufacturer;

pub use advertising::{Advertisement, RawPayload};
pub use manufacturer::*;
