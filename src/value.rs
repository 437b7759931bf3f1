//! Checked, typed access to S7 buffers.
//!
//! The `get_*_at`/`set_*_at` codecs trust the caller to stay inside the
//! buffer. [`read_value`] and [`write_value`] verify the span first and
//! return [`S7Error::OutOfBounds`] instead of panicking, then delegate to
//! the same codecs.
//!
//! # Example
//!
//! ```
//! use s7_buffer::{read_value, write_value, Address, DataType, S7Error, S7Value};
//!
//! let mut buffer = [0u8; 8];
//! write_value(&mut buffer, Address::new(4), &S7Value::Real(21.5))?;
//! assert_eq!(read_value(&buffer, Address::new(4), DataType::Real)?, S7Value::Real(21.5));
//!
//! write_value(&mut buffer, Address::bit(0, 3), &S7Value::Bool(true))?;
//! assert_eq!(buffer[0], 0x08);
//!
//! let err = read_value(&buffer, Address::new(6), DataType::DInt).unwrap_err();
//! assert!(matches!(err, S7Error::OutOfBounds { .. }));
//! # Ok::<(), S7Error>(())
//! ```

use crate::bits::{get_bit_at, set_bit_at};
use crate::date::{get_date_at, set_date_at, CalendarDate};
use crate::datetime::{
    get_date_and_time_at, get_dtl_at, set_date_and_time_at, set_dtl_at, DateAndTime, Dtl,
};
use crate::error::{check_span, Result};
use crate::int::*;
use crate::real::{get_lreal_at, get_real_at, set_lreal_at, set_real_at};
use crate::string::{get_string_at, set_string_at, MAX_STRING_LEN, STRING_HEADER_SIZE};
use crate::time::{get_tod_at, set_tod_at, TimeOfDay};
use crate::types::DataType;

/// Location of a value inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address {
    /// Byte offset from the start of the buffer.
    pub offset: usize,
    /// Bit index within the byte, only used by BOOL values.
    pub bit: u8,
}

impl Address {
    /// Creates a byte address.
    pub fn new(offset: usize) -> Self {
        Self { offset, bit: 0 }
    }

    /// Creates a bit address (`offset.bit`).
    pub fn bit(offset: usize, bit: u8) -> Self {
        Self { offset, bit }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.offset, self.bit)
    }
}

/// A decoded S7 value, one variant per [`DataType`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum S7Value {
    /// BOOL
    Bool(bool),
    /// BYTE
    Byte(u8),
    /// SINT
    SInt(i8),
    /// WORD
    Word(u16),
    /// UINT
    UInt(u16),
    /// INT
    Int(i16),
    /// DWORD
    DWord(u32),
    /// UDINT
    UDInt(u32),
    /// DINT
    DInt(i32),
    /// LWORD
    LWord(u64),
    /// ULINT
    ULInt(u64),
    /// LINT
    LInt(i64),
    /// REAL
    Real(f32),
    /// LREAL
    LReal(f64),
    /// STRING with its declared maximum length.
    String {
        /// Declared maximum length (header byte 0).
        max_len: u8,
        /// Text content.
        text: String,
    },
    /// TOD
    Tod(TimeOfDay),
    /// DATE
    Date(CalendarDate),
    /// DATE_AND_TIME
    DateAndTime(DateAndTime),
    /// DTL
    Dtl(Dtl),
}

impl S7Value {
    /// Returns the data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            S7Value::Bool(_) => DataType::Bool,
            S7Value::Byte(_) => DataType::Byte,
            S7Value::SInt(_) => DataType::SInt,
            S7Value::Word(_) => DataType::Word,
            S7Value::UInt(_) => DataType::UInt,
            S7Value::Int(_) => DataType::Int,
            S7Value::DWord(_) => DataType::DWord,
            S7Value::UDInt(_) => DataType::UDInt,
            S7Value::DInt(_) => DataType::DInt,
            S7Value::LWord(_) => DataType::LWord,
            S7Value::ULInt(_) => DataType::ULInt,
            S7Value::LInt(_) => DataType::LInt,
            S7Value::Real(_) => DataType::Real,
            S7Value::LReal(_) => DataType::LReal,
            S7Value::String { .. } => DataType::String,
            S7Value::Tod(_) => DataType::Tod,
            S7Value::Date(_) => DataType::Date,
            S7Value::DateAndTime(_) => DataType::DateAndTime,
            S7Value::Dtl(_) => DataType::Dtl,
        }
    }

    /// Returns the number of bytes writing this value touches.
    pub fn encoded_len(&self) -> usize {
        match self {
            S7Value::String { text, .. } => {
                STRING_HEADER_SIZE + text.chars().count().min(MAX_STRING_LEN)
            }
            other => other.data_type().size(),
        }
    }
}

/// Reads a value of type `data_type` at `addr`.
///
/// # Errors
///
/// Returns `S7Error::OutOfBounds` if the value does not fit inside `buffer`.
/// For STRING both the header and the announced payload are checked.
pub fn read_value(buffer: &[u8], addr: Address, data_type: DataType) -> Result<S7Value> {
    let pos = addr.offset;
    let size = match data_type {
        DataType::String => {
            check_span(pos, STRING_HEADER_SIZE, buffer.len())?;
            STRING_HEADER_SIZE + usize::from(buffer[pos + 1])
        }
        other => other.size(),
    };
    check_span(pos, size, buffer.len())?;

    let value = match data_type {
        DataType::Bool => S7Value::Bool(get_bit_at(buffer, pos, i32::from(addr.bit))),
        DataType::Byte => S7Value::Byte(get_byte_at(buffer, pos)),
        DataType::SInt => S7Value::SInt(get_sint_at(buffer, pos)),
        DataType::Word => S7Value::Word(get_word_at(buffer, pos)),
        DataType::UInt => S7Value::UInt(get_uint_at(buffer, pos)),
        DataType::Int => S7Value::Int(get_int_at(buffer, pos)),
        DataType::DWord => S7Value::DWord(get_dword_at(buffer, pos)),
        DataType::UDInt => S7Value::UDInt(get_udint_at(buffer, pos)),
        DataType::DInt => S7Value::DInt(get_dint_at(buffer, pos)),
        DataType::LWord => S7Value::LWord(get_lword_at(buffer, pos)),
        DataType::ULInt => S7Value::ULInt(get_ulint_at(buffer, pos)),
        DataType::LInt => S7Value::LInt(get_lint_at(buffer, pos)),
        DataType::Real => S7Value::Real(get_real_at(buffer, pos)),
        DataType::LReal => S7Value::LReal(get_lreal_at(buffer, pos)),
        DataType::Tod => S7Value::Tod(get_tod_at(buffer, pos)),
        DataType::Date => S7Value::Date(get_date_at(buffer, pos)),
        DataType::DateAndTime => S7Value::DateAndTime(get_date_and_time_at(buffer, pos)),
        DataType::Dtl => S7Value::Dtl(get_dtl_at(buffer, pos)),
        DataType::String => S7Value::String {
            max_len: buffer[pos],
            text: get_string_at(buffer, pos),
        },
    };
    Ok(value)
}

/// Writes `value` at `addr`.
///
/// # Errors
///
/// Returns `S7Error::OutOfBounds` if the encoded value does not fit inside
/// `buffer`. Nothing is written in that case.
pub fn write_value(buffer: &mut [u8], addr: Address, value: &S7Value) -> Result<()> {
    let pos = addr.offset;
    check_span(pos, value.encoded_len(), buffer.len())?;
    match value {
        S7Value::Bool(v) => set_bit_at(buffer, pos, i32::from(addr.bit), *v),
        S7Value::Byte(v) => set_byte_at(buffer, pos, *v),
        S7Value::SInt(v) => set_sint_at(buffer, pos, i32::from(*v)),
        S7Value::Word(v) => set_word_at(buffer, pos, *v),
        S7Value::UInt(v) => set_uint_at(buffer, pos, *v),
        S7Value::Int(v) => set_int_at(buffer, pos, *v),
        S7Value::DWord(v) => set_dword_at(buffer, pos, *v),
        S7Value::UDInt(v) => set_udint_at(buffer, pos, *v),
        S7Value::DInt(v) => set_dint_at(buffer, pos, *v),
        S7Value::LWord(v) => set_lword_at(buffer, pos, *v),
        S7Value::ULInt(v) => set_ulint_at(buffer, pos, *v),
        S7Value::LInt(v) => set_lint_at(buffer, pos, *v),
        S7Value::Real(v) => set_real_at(buffer, pos, *v),
        S7Value::LReal(v) => set_lreal_at(buffer, pos, *v),
        S7Value::String { max_len, text } => set_string_at(buffer, pos, *max_len, text),
        S7Value::Tod(v) => set_tod_at(buffer, pos, v),
        S7Value::Date(v) => set_date_at(buffer, pos, v),
        S7Value::DateAndTime(v) => set_date_and_time_at(buffer, pos, v),
        S7Value::Dtl(v) => set_dtl_at(buffer, pos, v),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::S7Error;

    fn samples() -> Vec<S7Value> {
        vec![
            S7Value::Bool(true),
            S7Value::Byte(0xA5),
            S7Value::SInt(-100),
            S7Value::Word(0xBEEF),
            S7Value::UInt(65_535),
            S7Value::Int(-32_768),
            S7Value::DWord(0xDEAD_BEEF),
            S7Value::UDInt(4_000_000_000),
            S7Value::DInt(i32::MIN),
            S7Value::LWord(u64::MAX),
            S7Value::ULInt(1 << 40),
            S7Value::LInt(i64::MIN),
            S7Value::Real(-1.5),
            S7Value::LReal(1e300),
            S7Value::String {
                max_len: 16,
                text: "Conveyor".to_string(),
            },
            S7Value::Tod(TimeOfDay::new(13, 37, 0, 42)),
            S7Value::Date(CalendarDate::new(2031, 10, 14)),
            S7Value::DateAndTime(DateAndTime::new(1999, 12, 31, 23, 59, 59, 999)),
            S7Value::Dtl(Dtl::new(2040, 2, 29, 12, 0, 0, 1)),
        ]
    }

    #[test]
    fn test_every_type_through_checked_layer() {
        for value in samples() {
            let mut buffer = vec![0u8; 40];
            let addr = Address::bit(3, 6);
            write_value(&mut buffer, addr, &value).unwrap();
            let decoded = read_value(&buffer, addr, value.data_type()).unwrap();
            assert_eq!(decoded, value, "{}", value.data_type());
        }
    }

    #[test]
    fn test_encoded_len_matches_catalog() {
        for value in samples() {
            match value.data_type() {
                DataType::String => assert_eq!(value.encoded_len(), 10),
                ty => assert_eq!(value.encoded_len(), ty.size()),
            }
        }
    }

    #[test]
    fn test_read_out_of_bounds() {
        let buffer = [0u8; 4];
        assert_eq!(
            read_value(&buffer, Address::new(1), DataType::DInt),
            Err(S7Error::out_of_bounds(1, 4, 4))
        );
        assert!(read_value(&buffer, Address::new(4), DataType::Bool).is_err());
        assert!(read_value(&buffer, Address::new(0), DataType::Dtl).is_err());
        assert!(read_value(&buffer, Address::new(usize::MAX), DataType::Byte).is_err());
    }

    #[test]
    fn test_read_string_checks_announced_length() {
        let buffer = [10, 5, b'a', b'b'];
        assert_eq!(
            read_value(&buffer, Address::new(0), DataType::String),
            Err(S7Error::out_of_bounds(0, 7, 4))
        );
        assert!(read_value(&buffer, Address::new(3), DataType::String).is_err());
    }

    #[test]
    fn test_write_out_of_bounds_leaves_buffer() {
        let mut buffer = [0x11u8; 6];
        let dtl = S7Value::Dtl(Dtl::new(2000, 1, 1, 0, 0, 0, 0));
        let err = write_value(&mut buffer, Address::new(0), &dtl);
        assert_eq!(err, Err(S7Error::out_of_bounds(0, 12, 6)));
        assert_eq!(buffer, [0x11; 6]);

        let text = S7Value::String {
            max_len: 10,
            text: "ABCDE".to_string(),
        };
        assert!(write_value(&mut buffer, Address::new(0), &text).is_err());
    }

    #[test]
    fn test_string_with_high_bytes_fits_exact_span() {
        // "25°C" is five UTF-8 bytes but four CHAR bytes on the wire
        let value = S7Value::String {
            max_len: 4,
            text: "25\u{B0}C".to_string(),
        };
        assert_eq!(value.encoded_len(), 6);
        let mut buffer = [0u8; 6];
        write_value(&mut buffer, Address::new(0), &value).unwrap();
        assert_eq!(buffer, [4, 4, b'2', b'5', 0xB0, b'C']);
        assert_eq!(read_value(&buffer, Address::new(0), DataType::String), Ok(value));
    }

    #[test]
    fn test_bool_uses_bit_index() {
        let mut buffer = [0u8; 2];
        write_value(&mut buffer, Address::bit(1, 7), &S7Value::Bool(true)).unwrap();
        assert_eq!(buffer, [0x00, 0x80]);
        assert_eq!(
            read_value(&buffer, Address::bit(1, 6), DataType::Bool),
            Ok(S7Value::Bool(false))
        );
    }

    #[test]
    fn test_address_display() {
        assert_eq!(Address::bit(4, 3).to_string(), "4.3");
    }
}
