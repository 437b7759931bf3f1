//! Proleptic Gregorian day-count conversion.
//!
//! Integer-only `days_from_civil` / `civil_from_days` after Howard Hinnant's
//! civil calendar algorithms. Day counts are relative to 0000-03-01, the
//! algorithm's internal epoch; S7 counts DATE values from 1990-01-01, which is
//! [`EPOCH_OFFSET_DAYS`] days later.
//!
//! # Example
//!
//! ```
//! use s7_buffer::calendar::{civil_from_days, days_from_civil, weekday, EPOCH_OFFSET_DAYS};
//!
//! assert_eq!(days_from_civil(1990, 1, 1), EPOCH_OFFSET_DAYS);
//! assert_eq!(civil_from_days(EPOCH_OFFSET_DAYS + 31), (1990, 2, 1));
//!
//! // 1 = Sunday, 2 = Monday, ... 7 = Saturday
//! assert_eq!(weekday(1990, 1, 1), 2);
//! ```

/// Days from 0000-03-01 to 1990-01-01.
pub const EPOCH_OFFSET_DAYS: i64 = 726_773;

const DAYS_PER_ERA: i64 = 146_097;

/// Converts a civil date to a day count since 0000-03-01.
///
/// Month and day are not validated; out-of-range values are folded into the
/// count arithmetically.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let yoe = year - era * 400; // [0, 399]
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe
}

/// Converts a day count since 0000-03-01 to `(year, month, day)`.
pub fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let era = days.div_euclid(DAYS_PER_ERA);
    let doe = days - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month as u32, day as u32)
}

/// Returns the S7 weekday of a civil date, 1 = Sunday through 7 = Saturday.
///
/// Calibrated so that 1990-01-01 is 2 (Monday).
pub fn weekday(year: i32, month: u32, day: u32) -> u8 {
    let days = days_from_civil(year, month, day) - EPOCH_OFFSET_DAYS;
    ((days + 1).rem_euclid(7) + 1) as u8
}
