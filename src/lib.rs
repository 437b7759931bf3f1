//! # S7 Buffer Mapping Library
//!
//! Byte-exact conversion between the payload region of a Siemens S7 frame and
//! the S7 data types: integers, floats, strings, and the date/time family.
//!
//! This is a **mapping-only** library: no connections, no frames, no I/O.
//! The caller owns the buffer and supplies an offset; each call reads or writes
//! exactly the bytes of one value at that offset and keeps no state.
//!
//! ## Features
//!
//! - **Byte-exact**: big-endian integers, raw IEEE-754 bit patterns, BCD dates
//! - **Stateless**: every function is a pure operation over caller-owned memory
//! - **Permissive by contract**: out-of-range bit indices and SINT values clamp,
//!   oversized text truncates, unknown catalog codes fall back to defined answers
//! - **Checked layer**: [`read_value`]/[`write_value`] return `Result` instead of
//!   panicking on short buffers
//! - **Optional** `serde` and `chrono` integration
//!
//! ## Quick Start
//!
//! ```
//! use s7_buffer::int::{get_dint_at, set_dint_at};
//! use s7_buffer::real::{get_real_at, set_real_at};
//! use s7_buffer::bits::{get_bit_at, set_bit_at};
//!
//! // A DB image read from the PLC
//! let mut db = [0u8; 16];
//!
//! set_dint_at(&mut db, 0, -123456);
//! set_real_at(&mut db, 4, 21.5);
//! set_bit_at(&mut db, 8, 3, true);
//!
//! assert_eq!(get_dint_at(&db, 0), -123456);
//! assert_eq!(get_real_at(&db, 4), 21.5);
//! assert!(get_bit_at(&db, 8, 3));
//! ```
//!
//! ## Data Types
//!
//! | Type | Size | Module |
//! |------|:----:|--------|
//! | BOOL | 1 bit | [`bits`] |
//! | BYTE, SINT | 1 | [`int`] |
//! | WORD, UINT, INT | 2 | [`int`] |
//! | DWORD, UDINT, DINT | 4 | [`int`] |
//! | LWORD, ULINT, LINT | 8 | [`int`] |
//! | REAL, LREAL | 4, 8 | [`real`] |
//! | STRING, ARRAY OF CHAR | 2 + n, n | [`string`] |
//! | TOD | 4 | [`time`] |
//! | DATE | 2 | [`date`] |
//! | DATE_AND_TIME, DTL | 8, 12 | [`datetime`] |
//!
//! ### Dates and Times
//!
//! ```
//! use s7_buffer::datetime::{get_dtl_at, set_dtl_at};
//! use s7_buffer::date::{get_date_at, set_date_at};
//! use s7_buffer::{CalendarDate, Dtl};
//!
//! let mut buffer = [0u8; 14];
//!
//! set_date_at(&mut buffer, 0, &CalendarDate::new(2024, 7, 4));
//! assert_eq!(get_date_at(&buffer, 0), CalendarDate::new(2024, 7, 4));
//!
//! // weekday is always derived from the date when encoding
//! set_dtl_at(&mut buffer, 2, &Dtl::new(1990, 1, 1, 6, 0, 0, 0));
//! assert_eq!(get_dtl_at(&buffer, 2).weekday, 2); // Monday
//! ```
//!
//! ### Strings
//!
//! ```
//! use s7_buffer::string::{get_string_at, set_string_at};
//!
//! let mut buffer = [0u8; 12];
//! set_string_at(&mut buffer, 0, 10, "AB");
//! assert_eq!(&buffer[..4], &[10, 2, b'A', b'B']);
//! assert_eq!(get_string_at(&buffer, 0), "AB");
//! ```
//!
//! ## Error Handling
//!
//! The raw `get_*_at`/`set_*_at` functions have no error channel. Offsets
//! outside the buffer are a caller bug and panic through slice indexing.
//! When offsets come from untrusted configuration, use the checked layer:
//!
//! ```
//! use s7_buffer::{read_value, Address, DataType, S7Error};
//!
//! let buffer = [0u8; 4];
//! match read_value(&buffer, Address::new(2), DataType::DInt) {
//!     Ok(value) => println!("value: {:?}", value),
//!     Err(S7Error::OutOfBounds { offset, size, len }) => {
//!         println!("{} bytes at {} do not fit in {}", size, offset, len);
//!     }
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Clamping and truncation decisions are reported as `tracing` events at
//! `trace`/`debug` level. Install any subscriber to see them.
//!
//! ## Concurrency
//!
//! No function holds state. Calls on disjoint byte ranges may run in parallel;
//! the borrow checker already rules out overlapping writes through `&mut [u8]`.

#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bcd;
pub mod bits;
pub mod calendar;
pub mod date;
pub mod datetime;
mod error;
pub mod int;
#[cfg(feature = "chrono")]
mod interop;
pub mod real;
pub mod string;
pub mod time;
mod tsap;
mod types;
mod value;

// Public re-exports
pub use date::CalendarDate;
pub use datetime::{DateAndTime, Dtl, DATE_AND_TIME_SIZE, DTL_SIZE};
pub use error::{Result, S7Error};
pub use string::{string_size, MAX_STRING_LEN};
pub use time::TimeOfDay;
pub use tsap::{word_from_tsap, Tsap};
pub use types::{
    area_source_label, data_type_label, data_type_size, plc_family_label, AreaSource, DataType,
    PlcFamily, UNKNOWN_AREA_SOURCE_LABEL, UNKNOWN_DATA_TYPE_LABEL, UNKNOWN_PLC_FAMILY_LABEL,
};
pub use value::{read_value, write_value, Address, S7Value};
