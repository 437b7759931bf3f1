//! Error types for checked buffer access and catalog lookups.
//!
//! The raw `get_*_at`/`set_*_at` codecs never return these. They are produced
//! by the checked [`read_value`](crate::read_value)/[`write_value`](crate::write_value)
//! layer, by the `TryFrom<i32>` catalog conversions, by the `chrono`
//! conversions and by strict TSAP parsing.

use thiserror::Error;

/// Result type alias for S7 buffer operations.
pub type Result<T> = std::result::Result<T, S7Error>;

/// Errors that can occur while mapping S7 data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum S7Error {
    /// The requested span does not fit inside the buffer.
    #[error("Out of bounds: {size} byte(s) at offset {offset} exceed buffer of {len} byte(s)")]
    OutOfBounds {
        /// Offset the access started at.
        offset: usize,
        /// Number of bytes the access needed.
        size: usize,
        /// Length of the buffer.
        len: usize,
    },

    /// Numeric data type code not present in the catalog.
    #[error("Unknown data type code {0}")]
    UnknownDataType(i32),

    /// Numeric PLC family code not present in the catalog.
    #[error("Unknown PLC family code {0}")]
    UnknownPlcFamily(i32),

    /// Numeric area source code not present in the catalog.
    #[error("Unknown area source code 0x{0:02X}")]
    UnknownAreaSource(i32),

    /// A field lies outside the range its S7 type can hold.
    #[error("Out of range: {field} {value} cannot be represented")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// TSAP text could not be parsed.
    #[error("Invalid TSAP: {reason}")]
    InvalidTsap {
        /// Description of the parse failure.
        reason: String,
    },
}

impl S7Error {
    /// Creates a new `OutOfBounds` error.
    ///
    /// # Example
    ///
    /// ```
    /// use s7_buffer::S7Error;
    ///
    /// let err = S7Error::out_of_bounds(6, 4, 8);
    /// ```
    pub fn out_of_bounds(offset: usize, size: usize, len: usize) -> Self {
        Self::OutOfBounds { offset, size, len }
    }

    /// Creates a new `OutOfRange` error.
    ///
    /// # Example
    ///
    /// ```
    /// use s7_buffer::S7Error;
    ///
    /// let err = S7Error::out_of_range("year", 2150);
    /// ```
    pub fn out_of_range(field: &'static str, value: impl Into<i64>) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
        }
    }

    /// Creates a new `InvalidTsap` error.
    ///
    /// # Example
    ///
    /// ```
    /// use s7_buffer::S7Error;
    ///
    /// let err = S7Error::invalid_tsap("missing '.' delimiter");
    /// ```
    pub fn invalid_tsap(reason: impl Into<String>) -> Self {
        Self::InvalidTsap {
            reason: reason.into(),
        }
    }
}

/// Verifies that `size` bytes starting at `offset` fit in a buffer of `len` bytes.
pub(crate) fn check_span(offset: usize, size: usize, len: usize) -> Result<()> {
    match offset.checked_add(size) {
        Some(end) if end <= len => Ok(()),
        _ => Err(S7Error::out_of_bounds(offset, size, len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = S7Error::out_of_bounds(6, 4, 8);
        assert_eq!(
            err.to_string(),
            "Out of bounds: 4 byte(s) at offset 6 exceed buffer of 8 byte(s)"
        );
    }

    #[test]
    fn test_unknown_codes_display() {
        assert_eq!(
            S7Error::UnknownDataType(99).to_string(),
            "Unknown data type code 99"
        );
        assert_eq!(
            S7Error::UnknownAreaSource(0x1C).to_string(),
            "Unknown area source code 0x1C"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = S7Error::out_of_range("nanosecond", 1_500_000_000u32);
        assert_eq!(
            err.to_string(),
            "Out of range: nanosecond 1500000000 cannot be represented"
        );
    }

    #[test]
    fn test_invalid_tsap_display() {
        let err = S7Error::invalid_tsap("missing '.' delimiter");
        assert_eq!(err.to_string(), "Invalid TSAP: missing '.' delimiter");
    }

    #[test]
    fn test_check_span() {
        assert!(check_span(0, 4, 4).is_ok());
        assert!(check_span(4, 0, 4).is_ok());
        assert_eq!(check_span(1, 4, 4), Err(S7Error::out_of_bounds(1, 4, 4)));
        assert!(check_span(usize::MAX, 2, 4).is_err());
    }
}
