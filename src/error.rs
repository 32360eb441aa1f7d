//! Error types for the garnet-chefiq-ble crate.

use thiserror::Error;

/// The main error type for this crate.
///
/// None of these escape [`Dispatcher::decode`](crate::Dispatcher::decode):
/// the dispatcher turns them into skipped outcomes and absent values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The payload length does not match the layout being decoded.
    #[error("Layout mismatch: expected {expected} bytes, got {actual}")]
    Layout {
        /// Size of the layout in bytes.
        expected: usize,
        /// Length of the buffer that was offered.
        actual: usize,
    },

    /// An ASCII numeric field could not be parsed as an integer.
    #[error("Field is not a number: {raw:?}")]
    FieldParse {
        /// The text that failed to parse.
        raw: String,
    },

    /// A decoded field was read with the wrong shape or index.
    #[error("Invalid data: {context}")]
    InvalidData {
        /// Description of what was invalid about the data.
        context: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
