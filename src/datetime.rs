//! S7 DATE_AND_TIME (DT) and DTL codecs.
//!
//! # DATE_AND_TIME (8 bytes, BCD)
//!
//! | Byte | Content | Range |
//! |------|---------|-------|
//! | 0 | Year (two digits, BCD) | 90-99 = 1990-1999, 00-89 = 2000-2089 |
//! | 1 | Month (BCD) | 1-12 |
//! | 2 | Day (BCD) | 1-31 |
//! | 3 | Hour (BCD) | 0-23 |
//! | 4 | Minute (BCD) | 0-59 |
//! | 5 | Second (BCD) | 0-59 |
//! | 6 | Millisecond / 10 (BCD) | 0-99 |
//! | 7 | High nibble: millisecond % 10, low nibble: weekday | 0-9 / 1-7 |
//!
//! # DTL (12 bytes, binary)
//!
//! | Bytes | Content | Range |
//! |-------|---------|-------|
//! | 0-1 | Year (big-endian) | 1970-2262 |
//! | 2 | Month | 1-12 |
//! | 3 | Day | 1-31 |
//! | 4 | Weekday | 1-7 |
//! | 5 | Hour | 0-23 |
//! | 6 | Minute | 0-59 |
//! | 7 | Second | 0-59 |
//! | 8-11 | Nanosecond (big-endian) | 0-999 999 999 |
//!
//! Weekdays use 1 = Sunday through 7 = Saturday. Both encoders derive the
//! weekday from the date; the `weekday` field of the value passed in is
//! ignored. Decoders return the stored weekday as-is.
//!
//! # Example
//!
//! ```
//! use s7_buffer::datetime::{get_date_and_time_at, set_date_and_time_at};
//! use s7_buffer::DateAndTime;
//!
//! let mut buffer = [0u8; 8];
//! let dt = DateAndTime::new(1990, 1, 1, 12, 30, 45, 123);
//! set_date_and_time_at(&mut buffer, 0, &dt);
//! assert_eq!(buffer, [0x90, 0x01, 0x01, 0x12, 0x30, 0x45, 0x12, 0x32]);
//!
//! let decoded = get_date_and_time_at(&buffer, 0);
//! assert_eq!(decoded, dt);
//! assert_eq!(decoded.weekday, 2); // Monday
//! ```

use crate::bcd::{bcd_to_int, int_to_bcd};
use crate::calendar::weekday;
use crate::int::{get_byte_at, get_udint_at, get_uint_at, set_byte_at, set_udint_at, set_uint_at};

/// Size of a DATE_AND_TIME value in bytes.
pub const DATE_AND_TIME_SIZE: usize = 8;
/// Size of a DTL value in bytes.
pub const DTL_SIZE: usize = 12;

/// Decoded DATE_AND_TIME value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateAndTime {
    /// Full year (1990-2089).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-59).
    pub second: u8,
    /// Millisecond (0-999).
    pub millisecond: u16,
    /// Weekday (1 = Sunday ... 7 = Saturday).
    pub weekday: u8,
}

impl DateAndTime {
    /// Creates a new value with the weekday derived from the date.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            weekday: weekday_of(year, month, day),
        }
    }
}

impl std::fmt::Display for DateAndTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DT#{:04}-{:02}-{:02}-{:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Decoded DTL value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dtl {
    /// Full year (1970-2262).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Weekday (1 = Sunday ... 7 = Saturday).
    pub weekday: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-59).
    pub second: u8,
    /// Nanosecond (0-999 999 999).
    pub nanosecond: u32,
}

impl Dtl {
    /// Creates a new value with the weekday derived from the date.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            weekday: weekday_of(year, month, day),
            hour,
            minute,
            second,
            nanosecond,
        }
    }
}

impl std::fmt::Display for Dtl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DTL#{:04}-{:02}-{:02}-{:02}:{:02}:{:02}.{:09}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.nanosecond
        )
    }
}

#[inline]
fn weekday_of(year: u16, month: u8, day: u8) -> u8 {
    weekday(i32::from(year), u32::from(month), u32::from(day))
}

/// Expands a two-digit DATE_AND_TIME year: 90-99 map to the 1900s, 00-89 to the 2000s.
#[inline]
fn expand_year(two_digit: u8) -> u16 {
    let year = u16::from(two_digit);
    if year >= 90 {
        year + 1900
    } else {
        year + 2000
    }
}

/// Gets a DATE_AND_TIME value (8 bytes).
pub fn get_date_and_time_at(buffer: &[u8], pos: usize) -> DateAndTime {
    let b = &buffer[pos..pos + DATE_AND_TIME_SIZE];
    DateAndTime {
        year: expand_year(bcd_to_int(b[0])),
        month: bcd_to_int(b[1]),
        day: bcd_to_int(b[2]),
        hour: bcd_to_int(b[3]),
        minute: bcd_to_int(b[4]),
        second: bcd_to_int(b[5]),
        millisecond: u16::from(bcd_to_int(b[6])) * 10 + u16::from(b[7] >> 4),
        weekday: b[7] & 0x0F,
    }
}

/// Sets a DATE_AND_TIME value (8 bytes).
///
/// Only the last two digits of the year are stored. The weekday nibble is
/// computed from the date.
pub fn set_date_and_time_at(buffer: &mut [u8], pos: usize, dt: &DateAndTime) {
    let weekday = weekday_of(dt.year, dt.month, dt.day);
    let b = &mut buffer[pos..pos + DATE_AND_TIME_SIZE];
    b[0] = int_to_bcd((dt.year % 100) as u8);
    b[1] = int_to_bcd(dt.month);
    b[2] = int_to_bcd(dt.day);
    b[3] = int_to_bcd(dt.hour);
    b[4] = int_to_bcd(dt.minute);
    b[5] = int_to_bcd(dt.second);
    b[6] = int_to_bcd((dt.millisecond / 10) as u8);
    b[7] = (((dt.millisecond % 10) as u8) << 4) | weekday;
}

/// Gets a DTL value (12 bytes).
pub fn get_dtl_at(buffer: &[u8], pos: usize) -> Dtl {
    Dtl {
        year: get_uint_at(buffer, pos),
        month: get_byte_at(buffer, pos + 2),
        day: get_byte_at(buffer, pos + 3),
        weekday: get_byte_at(buffer, pos + 4),
        hour: get_byte_at(buffer, pos + 5),
        minute: get_byte_at(buffer, pos + 6),
        second: get_byte_at(buffer, pos + 7),
        nanosecond: get_udint_at(buffer, pos + 8),
    }
}

/// Sets a DTL value (12 bytes).
///
/// The weekday byte is computed from the date.
///
/// # Example
///
/// ```
/// use s7_buffer::datetime::set_dtl_at;
/// use s7_buffer::Dtl;
///
/// let mut buffer = [0u8; 12];
/// let mut dtl = Dtl::new(2024, 7, 4, 8, 15, 0, 500_000_000);
/// dtl.weekday = 1; // ignored
/// set_dtl_at(&mut buffer, 0, &dtl);
/// assert_eq!(buffer[4], 5); // Thursday
/// ```
pub fn set_dtl_at(buffer: &mut [u8], pos: usize, dtl: &Dtl) {
    set_uint_at(buffer, pos, dtl.year);
    set_byte_at(buffer, pos + 2, dtl.month);
    set_byte_at(buffer, pos + 3, dtl.day);
    set_byte_at(buffer, pos + 4, weekday_of(dtl.year, dtl.month, dtl.day));
    set_byte_at(buffer, pos + 5, dtl.hour);
    set_byte_at(buffer, pos + 6, dtl.minute);
    set_byte_at(buffer, pos + 7, dtl.second);
    set_udint_at(buffer, pos + 8, dtl.nanosecond);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_and_time_anchor_weekday() {
        let mut buffer = [0u8; 8];
        set_date_and_time_at(&mut buffer, 0, &DateAndTime::new(1990, 1, 1, 0, 0, 0, 0));
        assert_eq!(buffer, [0x90, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x02]);
    }

    #[test]
    fn test_date_and_time_century_rule() {
        let mut buffer = hex::decode("9506150000000002").unwrap();
        assert_eq!(get_date_and_time_at(&buffer, 0).year, 1995);

        buffer[0] = 0x05;
        assert_eq!(get_date_and_time_at(&buffer, 0).year, 2005);

        buffer[0] = 0x89;
        assert_eq!(get_date_and_time_at(&buffer, 0).year, 2089);

        buffer[0] = 0x90;
        assert_eq!(get_date_and_time_at(&buffer, 0).year, 1990);
    }

    #[test]
    fn test_date_and_time_millisecond_split() {
        let mut buffer = [0u8; 8];
        let dt = DateAndTime::new(2089, 12, 31, 23, 59, 59, 999);
        set_date_and_time_at(&mut buffer, 0, &dt);
        assert_eq!(buffer, [0x89, 0x12, 0x31, 0x23, 0x59, 0x59, 0x99, 0x97]);

        let decoded = get_date_and_time_at(&buffer, 0);
        assert_eq!(decoded.millisecond, 999);
        assert_eq!(decoded.weekday, 7); // Saturday
        assert_eq!(decoded, dt);
    }

    #[test]
    fn test_date_and_time_ignores_supplied_weekday() {
        let mut buffer = [0u8; 8];
        let mut dt = DateAndTime::new(2000, 1, 1, 0, 0, 0, 5);
        dt.weekday = 3;
        set_date_and_time_at(&mut buffer, 0, &dt);
        assert_eq!(buffer[7], 0x57);
    }

    #[test]
    fn test_date_and_time_decodes_stored_weekday() {
        // stored weekday is returned as-is, not recomputed
        let buffer = hex::decode("0001010000000004").unwrap();
        assert_eq!(get_date_and_time_at(&buffer, 0).weekday, 4);
    }

    #[test]
    fn test_date_and_time_at_offset() {
        let mut buffer = [0xEEu8; 12];
        let dt = DateAndTime::new(2023, 5, 15, 6, 7, 8, 90);
        set_date_and_time_at(&mut buffer, 2, &dt);
        assert_eq!(&buffer[..2], &[0xEE, 0xEE]);
        assert_eq!(&buffer[10..], &[0xEE, 0xEE]);
        assert_eq!(get_date_and_time_at(&buffer, 2), dt);
    }

    #[test]
    fn test_dtl_layout() {
        let mut buffer = [0u8; 12];
        let dtl = Dtl::new(1990, 1, 1, 13, 14, 15, 123_456_789);
        set_dtl_at(&mut buffer, 0, &dtl);
        assert_eq!(hex::encode(buffer), "07c60101020d0e0f075bcd15");
        assert_eq!(get_dtl_at(&buffer, 0), dtl);
    }

    #[test]
    fn test_dtl_overwrites_weekday() {
        let mut buffer = [0u8; 12];
        let mut dtl = Dtl::new(1970, 1, 1, 0, 0, 0, 0);
        assert_eq!(dtl.weekday, 5);
        dtl.weekday = 0;
        set_dtl_at(&mut buffer, 0, &dtl);
        assert_eq!(buffer[4], 5);
    }

    #[test]
    fn test_dtl_extremes() {
        let mut buffer = [0u8; 14];
        let dtl = Dtl::new(2262, 4, 11, 23, 47, 16, 854_775_807);
        set_dtl_at(&mut buffer, 1, &dtl);
        let decoded = get_dtl_at(&buffer, 1);
        assert_eq!(decoded, dtl);
        assert_eq!(decoded.nanosecond, 854_775_807);
    }

    #[test]
    fn test_display() {
        let dt = DateAndTime::new(1999, 12, 31, 23, 59, 58, 7);
        assert_eq!(dt.to_string(), "DT#1999-12-31-23:59:58.007");
        let dtl = Dtl::new(2024, 1, 2, 3, 4, 5, 6);
        assert_eq!(dtl.to_string(), "DTL#2024-01-02-03:04:05.000000006");
    }
}
