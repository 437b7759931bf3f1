//! S7 DATE codec.
//!
//! A DATE is an unsigned 16-bit count of days since 1990-01-01, covering
//! `D#1990-01-01` to `D#2168-12-31`.

use crate::calendar::{civil_from_days, days_from_civil, weekday, EPOCH_OFFSET_DAYS};
use crate::int::{get_uint_at, set_uint_at};

/// Calendar date (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    /// Full year, e.g. 2024.
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl CalendarDate {
    /// Creates a new date. Fields are not validated.
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts a day offset from 1990-01-01 to a date.
    ///
    /// # Example
    ///
    /// ```
    /// use s7_buffer::CalendarDate;
    ///
    /// assert_eq!(CalendarDate::from_day_offset(0), CalendarDate::new(1990, 1, 1));
    /// assert_eq!(CalendarDate::from_day_offset(365), CalendarDate::new(1991, 1, 1));
    /// ```
    pub fn from_day_offset(offset: u16) -> Self {
        let (year, month, day) = civil_from_days(i64::from(offset) + EPOCH_OFFSET_DAYS);
        Self::new(year as u16, month as u8, day as u8)
    }

    /// Returns the day offset from 1990-01-01.
    ///
    /// Dates outside the representable range wrap modulo 2^16.
    pub fn day_offset(&self) -> u16 {
        (self.days_since_epoch() - EPOCH_OFFSET_DAYS) as u16
    }

    /// Returns the S7 weekday of this date, 1 = Sunday through 7 = Saturday.
    pub fn weekday(&self) -> u8 {
        weekday(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    fn days_since_epoch(&self) -> i64 {
        days_from_civil(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Gets a DATE value (2 bytes).
pub fn get_date_at(buffer: &[u8], pos: usize) -> CalendarDate {
    CalendarDate::from_day_offset(get_uint_at(buffer, pos))
}

/// Sets a DATE value (2 bytes).
///
/// # Example
///
/// ```
/// use s7_buffer::date::set_date_at;
/// use s7_buffer::CalendarDate;
///
/// let mut buffer = [0u8; 2];
/// set_date_at(&mut buffer, 0, &CalendarDate::new(2000, 1, 1));
/// assert_eq!(u16::from_be_bytes(buffer), 3652);
/// ```
pub fn set_date_at(buffer: &mut [u8], pos: usize, date: &CalendarDate) {
    set_uint_at(buffer, pos, date.day_offset());
}
