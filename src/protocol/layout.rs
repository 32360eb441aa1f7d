//! Fixed-width field layouts.
//!
//! A [`Layout`] is an ordered list of [`Field`]s. Decoding checks that the
//! buffer is exactly as long as the layout and then reads every field in
//! order, so a decode either yields all fields or fails as a whole.

use bytes::Buf;

use crate::error::{Error, Result};

/// One fixed-width field within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit little-endian integer.
    U16Le,
    /// Unsigned 24-bit little-endian integer.
    U24Le,
    /// Fixed-length text.
    Ascii(usize),
    /// Bytes that are skipped.
    Pad(usize),
}

impl Field {
    /// Width of the field in bytes.
    pub const fn width(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16Le => 2,
            Self::U24Le => 3,
            Self::Ascii(len) | Self::Pad(len) => *len,
        }
    }
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// An unsigned integer field.
    Uint(u32),
    /// A text field. Invalid UTF-8 is replaced, not rejected.
    Text(String),
    /// A padding field.
    Padding,
}

/// Ordered field layout of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    fields: &'static [Field],
}

impl Layout {
    /// Create a layout from its fields.
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Total size of the layout in bytes.
    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width();
            i += 1;
        }
        total
    }

    /// The fields of this layout.
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Decode `data` against this layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Layout`] if `data` is not exactly [`Layout::size`] bytes.
    pub fn decode(&self, data: &[u8]) -> Result<DecodedFields> {
        let expected = self.size();
        if data.len() != expected {
            return Err(Error::Layout {
                expected,
                actual: data.len(),
            });
        }

        let mut buf = data;
        let values = self
            .fields
            .iter()
            .map(|field| match *field {
                Field::U8 => FieldValue::Uint(buf.get_u8() as u32),
                Field::U16Le => FieldValue::Uint(buf.get_u16_le() as u32),
                Field::U24Le => FieldValue::Uint(buf.get_uint_le(3) as u32),
                Field::Ascii(len) => {
                    let text = String::from_utf8_lossy(&buf[..len]).into_owned();
                    buf.advance(len);
                    FieldValue::Text(text)
                }
                Field::Pad(len) => {
                    buf.advance(len);
                    FieldValue::Padding
                }
            })
            .collect();

        Ok(DecodedFields { values })
    }
}

/// Field values produced by [`Layout::decode`], in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFields {
    values: Vec<FieldValue>,
}

impl DecodedFields {
    /// Get the integer field at `index`.
    pub fn uint(&self, index: usize) -> Result<u32> {
        match self.values.get(index) {
            Some(FieldValue::Uint(value)) => Ok(*value),
            other => Err(Error::InvalidData {
                context: format!("field {index} is not an integer: {other:?}"),
            }),
        }
    }

    /// Get the byte field at `index`.
    pub fn byte(&self, index: usize) -> Result<u8> {
        let value = self.uint(index)?;
        u8::try_from(value).map_err(|_| Error::InvalidData {
            context: format!("field {index} does not fit in a byte: {value}"),
        })
    }

    /// Get the text field at `index`.
    pub fn text(&self, index: usize) -> Result<&str> {
        match self.values.get(index) {
            Some(FieldValue::Text(text)) => Ok(text),
            other => Err(Error::InvalidData {
                context: format!("field {index} is not text: {other:?}"),
            }),
        }
    }

    /// All decoded values.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }
}

/// Parse an ASCII numeric field.
///
/// Surrounding whitespace is ignored and a leading sign is accepted.
///
/// # Errors
///
/// Returns [`Error::FieldParse`] if the text is not an integer.
pub fn parse_ascii_int(raw: &str) -> Result<i32> {
    raw.trim().parse::<i32>().map_err(|_| Error::FieldParse {
        raw: raw.to_string(),
    })
}
