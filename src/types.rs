//! Static catalogs: S7 data types, PLC families and memory area sources.
//!
//! # Data Types
//!
//! | Type | Code | Size (bytes) |
//! |------|:----:|:------------:|
//! | BOOL | 0 | 1 |
//! | BYTE, SINT | 1, 2 | 1 |
//! | WORD, UINT, INT | 3, 4, 5 | 2 |
//! | DWORD, UDINT, DINT | 6, 7, 8 | 4 |
//! | LWORD, ULINT, LINT | 9, 10, 11 | 8 |
//! | REAL | 12 | 4 |
//! | LREAL | 13 | 8 |
//! | STRING | 14 | 254 (maximum payload) |
//! | TOD | 15 | 4 |
//! | DATE | 16 | 2 |
//! | DATE_AND_TIME | 17 | 8 |
//! | DTL | 18 | 12 |
//!
//! Raw numeric codes arrive from configuration or the wire; the free functions
//! [`data_type_size`], [`plc_family_label`] and [`area_source_label`] accept
//! any code and fall back to a defined answer for unknown ones.
//!
//! # Example
//!
//! ```
//! use s7_buffer::{data_type_size, plc_family_label, DataType, PlcFamily};
//!
//! assert_eq!(DataType::Dtl.size(), 12);
//! assert_eq!(DataType::Dtl.to_string(), "DTL");
//! assert_eq!(data_type_size(8), 4); // DINT
//! assert_eq!(data_type_size(-1), 0); // unknown
//!
//! assert_eq!(PlcFamily::S71200_1500.label(), "S7 1200/1500");
//! assert_eq!(plc_family_label(42), "Unknown PLC");
//! ```

use crate::error::S7Error;
use crate::string::MAX_STRING_LEN;

/// Label returned for unknown data type codes.
pub const UNKNOWN_DATA_TYPE_LABEL: &str = "Unknown";
/// Label returned for unknown PLC family codes.
pub const UNKNOWN_PLC_FAMILY_LABEL: &str = "Unknown PLC";
/// Label returned for unknown area source codes.
pub const UNKNOWN_AREA_SOURCE_LABEL: &str = "Unknown Data Source";

/// S7 data types supported by the buffer codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// BOOL - a single bit.
    Bool,
    /// BYTE - unsigned 8-bit.
    Byte,
    /// SINT - signed 8-bit.
    SInt,
    /// WORD - unsigned 16-bit.
    Word,
    /// UINT - unsigned 16-bit.
    UInt,
    /// INT - signed 16-bit.
    Int,
    /// DWORD - unsigned 32-bit.
    DWord,
    /// UDINT - unsigned 32-bit.
    UDInt,
    /// DINT - signed 32-bit.
    DInt,
    /// LWORD - unsigned 64-bit.
    LWord,
    /// ULINT - unsigned 64-bit.
    ULInt,
    /// LINT - signed 64-bit.
    LInt,
    /// REAL - IEEE-754 binary32.
    Real,
    /// LREAL - IEEE-754 binary64.
    LReal,
    /// STRING - length-prefixed text.
    String,
    /// TOD - time of day in milliseconds.
    Tod,
    /// DATE - days since 1990-01-01.
    Date,
    /// DATE_AND_TIME - BCD packed date and time.
    DateAndTime,
    /// DTL - binary date and time with nanoseconds.
    Dtl,
}

impl DataType {
    /// Every data type, in code order.
    pub const ALL: [DataType; 19] = [
        DataType::Bool,
        DataType::Byte,
        DataType::SInt,
        DataType::Word,
        DataType::UInt,
        DataType::Int,
        DataType::DWord,
        DataType::UDInt,
        DataType::DInt,
        DataType::LWord,
        DataType::ULInt,
        DataType::LInt,
        DataType::Real,
        DataType::LReal,
        DataType::String,
        DataType::Tod,
        DataType::Date,
        DataType::DateAndTime,
        DataType::Dtl,
    ];

    /// Returns the numeric code of this type.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns the size in bytes this type occupies in a buffer.
    ///
    /// STRING reports the maximum payload of 254 bytes; use
    /// [`string_size`](crate::string::string_size) for the span of a
    /// concrete declaration.
    pub fn size(self) -> usize {
        match self {
            DataType::Bool | DataType::Byte | DataType::SInt => 1,
            DataType::Word | DataType::UInt | DataType::Int | DataType::Date => 2,
            DataType::DWord | DataType::UDInt | DataType::DInt | DataType::Real | DataType::Tod => {
                4
            }
            DataType::LWord
            | DataType::ULInt
            | DataType::LInt
            | DataType::LReal
            | DataType::DateAndTime => 8,
            DataType::Dtl => 12,
            DataType::String => MAX_STRING_LEN,
        }
    }

    /// Returns the S7 name of this type.
    pub fn label(self) -> &'static str {
        match self {
            DataType::Bool => "BOOL",
            DataType::Byte => "BYTE",
            DataType::SInt => "SINT",
            DataType::Word => "WORD",
            DataType::UInt => "UINT",
            DataType::Int => "INT",
            DataType::DWord => "DWORD",
            DataType::UDInt => "UDINT",
            DataType::DInt => "DINT",
            DataType::LWord => "LWORD",
            DataType::ULInt => "ULINT",
            DataType::LInt => "LINT",
            DataType::Real => "REAL",
            DataType::LReal => "LREAL",
            DataType::String => "STRING",
            DataType::Tod => "TOD",
            DataType::Date => "DATE",
            DataType::DateAndTime => "DATE_AND_TIME",
            DataType::Dtl => "DTL",
        }
    }
}

impl TryFrom<i32> for DataType {
    type Error = S7Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|index| DataType::ALL.get(index).copied())
            .ok_or(S7Error::UnknownDataType(code))
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the size of the data type with the given code, or 0 if unknown.
pub fn data_type_size(code: i32) -> usize {
    DataType::try_from(code).map_or(0, DataType::size)
}

/// Returns the S7 name of the data type with the given code.
///
/// Unknown codes yield [`UNKNOWN_DATA_TYPE_LABEL`].
pub fn data_type_label(code: i32) -> &'static str {
    DataType::try_from(code).map_or(UNKNOWN_DATA_TYPE_LABEL, DataType::label)
}

/// Siemens PLC families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
pub enum PlcFamily {
    /// S7-300 and S7-400.
    S7300_400 = 0,
    /// S7-1200 and S7-1500.
    S71200_1500 = 1,
    /// LOGO! and S7-200.
    Logo200 = 2,
    /// SINAMICS drives.
    Sinamics = 3,
}

impl PlcFamily {
    /// Returns the numeric code of this family.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PlcFamily::S7300_400 => "S7 300/400",
            PlcFamily::S71200_1500 => "S7 1200/1500",
            PlcFamily::Logo200 => "LOGO/S7 200",
            PlcFamily::Sinamics => "SINAMICS",
        }
    }
}

impl TryFrom<i32> for PlcFamily {
    type Error = S7Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PlcFamily::S7300_400),
            1 => Ok(PlcFamily::S71200_1500),
            2 => Ok(PlcFamily::Logo200),
            3 => Ok(PlcFamily::Sinamics),
            other => Err(S7Error::UnknownPlcFamily(other)),
        }
    }
}

impl std::fmt::Display for PlcFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the label of the PLC family with the given code.
///
/// Unknown codes yield [`UNKNOWN_PLC_FAMILY_LABEL`].
pub fn plc_family_label(code: i32) -> &'static str {
    PlcFamily::try_from(code).map_or(UNKNOWN_PLC_FAMILY_LABEL, PlcFamily::label)
}

/// S7 memory areas a buffer can be read from.
///
/// Codes are the S7 area identifiers used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaSource {
    /// Process inputs (I / PE).
    Inputs = 0x81,
    /// Process outputs (Q / PA).
    Outputs = 0x82,
    /// Memory markers (M / MK).
    Marks = 0x83,
    /// Data blocks (DB).
    DataBlock = 0x84,
}

impl AreaSource {
    /// Returns the numeric area code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            AreaSource::Inputs => "INPUTS",
            AreaSource::Outputs => "OUTPUTS",
            AreaSource::Marks => "Marks",
            AreaSource::DataBlock => "DB",
        }
    }
}

impl TryFrom<i32> for AreaSource {
    type Error = S7Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0x81 => Ok(AreaSource::Inputs),
            0x82 => Ok(AreaSource::Outputs),
            0x83 => Ok(AreaSource::Marks),
            0x84 => Ok(AreaSource::DataBlock),
            other => Err(S7Error::UnknownAreaSource(other)),
        }
    }
}

impl std::fmt::Display for AreaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the label of the area source with the given code.
///
/// Unknown codes yield [`UNKNOWN_AREA_SOURCE_LABEL`].
pub fn area_source_label(code: i32) -> &'static str {
    AreaSource::try_from(code).map_or(UNKNOWN_AREA_SOURCE_LABEL, AreaSource::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_sizes() {
        assert_eq!(DataType::Bool.size(), 1);
        assert_eq!(DataType::SInt.size(), 1);
        assert_eq!(DataType::Date.size(), 2);
        assert_eq!(DataType::Int.size(), 2);
        assert_eq!(DataType::Tod.size(), 4);
        assert_eq!(DataType::Real.size(), 4);
        assert_eq!(DataType::LReal.size(), 8);
        assert_eq!(DataType::DateAndTime.size(), 8);
        assert_eq!(DataType::Dtl.size(), 12);
        assert_eq!(DataType::String.size(), 254);
    }

    #[test]
    fn test_codes_roundtrip() {
        for (index, ty) in DataType::ALL.iter().enumerate() {
            assert_eq!(ty.code(), index as i32);
            assert_eq!(DataType::try_from(ty.code()), Ok(*ty));
            assert_eq!(data_type_size(ty.code()), ty.size());
            assert_eq!(data_type_label(ty.code()), ty.label());
        }
    }

    #[test]
    fn test_unknown_data_type() {
        assert_eq!(data_type_size(19), 0);
        assert_eq!(data_type_size(-1), 0);
        assert_eq!(data_type_label(i32::MAX), "Unknown");
        assert_eq!(DataType::try_from(100), Err(S7Error::UnknownDataType(100)));
    }

    #[test]
    fn test_plc_family_labels() {
        assert_eq!(plc_family_label(0), "S7 300/400");
        assert_eq!(plc_family_label(1), "S7 1200/1500");
        assert_eq!(plc_family_label(2), "LOGO/S7 200");
        assert_eq!(plc_family_label(3), "SINAMICS");
        assert_eq!(plc_family_label(4), "Unknown PLC");
        assert_eq!(plc_family_label(-7), "Unknown PLC");
        assert_eq!(PlcFamily::Sinamics.to_string(), "SINAMICS");
        assert_eq!(PlcFamily::try_from(9), Err(S7Error::UnknownPlcFamily(9)));
    }

    #[test]
    fn test_area_source_labels() {
        assert_eq!(area_source_label(0x81), "INPUTS");
        assert_eq!(area_source_label(0x82), "OUTPUTS");
        assert_eq!(area_source_label(0x83), "Marks");
        assert_eq!(area_source_label(0x84), "DB");
        assert_eq!(area_source_label(0x1C), "Unknown Data Source");
        assert_eq!(AreaSource::DataBlock.code(), 0x84);
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::DateAndTime.to_string(), "DATE_AND_TIME");
        assert_eq!(DataType::UDInt.to_string(), "UDINT");
        assert_eq!(AreaSource::Marks.to_string(), "Marks");
    }
}
