//! S7 TIME_OF_DAY (TOD) codec.
//!
//! A TOD is an unsigned 32-bit count of milliseconds since midnight,
//! `TOD#00:00:00.000` to `TOD#23:59:59.999`.

use crate::int::{get_udint_at, set_udint_at};

const MS_PER_SECOND: u32 = 1_000;
const MS_PER_MINUTE: u32 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u32 = 60 * MS_PER_MINUTE;

/// Time of day with millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    /// Hour (0-23).
    pub hour: u32,
    /// Minute (0-59).
    pub minute: u32,
    /// Second (0-59).
    pub second: u32,
    /// Millisecond (0-999).
    pub millisecond: u32,
}

impl TimeOfDay {
    /// Creates a new time of day. Fields are not range checked.
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Splits a millisecond-since-midnight count into its fields.
    ///
    /// # Example
    ///
    /// ```
    /// use s7_buffer::TimeOfDay;
    ///
    /// let tod = TimeOfDay::from_millis(45_296_789);
    /// assert_eq!(tod, TimeOfDay::new(12, 34, 56, 789));
    /// ```
    pub fn from_millis(total: u32) -> Self {
        let millisecond = total % 1000;
        let seconds = total / 1000;
        let second = seconds % 60;
        let minutes = seconds / 60;
        let minute = minutes % 60;
        let hour = minutes / 60;
        Self::new(hour, minute, second, millisecond)
    }

    /// Returns the millisecond-since-midnight count.
    ///
    /// Out-of-range fields wrap modulo 2^32 rather than panic.
    pub fn as_millis(&self) -> u32 {
        self.hour
            .wrapping_mul(MS_PER_HOUR)
            .wrapping_add(self.minute.wrapping_mul(MS_PER_MINUTE))
            .wrapping_add(self.second.wrapping_mul(MS_PER_SECOND))
            .wrapping_add(self.millisecond)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Gets a TOD value (4 bytes).
///
/// # Example
///
/// ```
/// use s7_buffer::time::get_tod_at;
/// use s7_buffer::TimeOfDay;
///
/// // 82_800_000 ms = 23:00:00.000
/// let buffer = [0x04, 0xEF, 0x6D, 0x80];
/// assert_eq!(get_tod_at(&buffer, 0), TimeOfDay::new(23, 0, 0, 0));
/// ```
pub fn get_tod_at(buffer: &[u8], pos: usize) -> TimeOfDay {
    TimeOfDay::from_millis(get_udint_at(buffer, pos))
}

/// Sets a TOD value (4 bytes).
pub fn set_tod_at(buffer: &mut [u8], pos: usize, tod: &TimeOfDay) {
    set_udint_at(buffer, pos, tod.as_millis());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tod_layout() {
        let mut buffer = [0u8; 4];
        set_tod_at(&mut buffer, 0, &TimeOfDay::new(0, 0, 1, 500));
        assert_eq!(buffer, 1500u32.to_be_bytes());
    }

    #[test]
    fn test_tod_extremes() {
        let mut buffer = [0u8; 4];
        set_tod_at(&mut buffer, 0, &TimeOfDay::default());
        assert_eq!(buffer, [0; 4]);

        let last = TimeOfDay::new(23, 59, 59, 999);
        set_tod_at(&mut buffer, 0, &last);
        assert_eq!(get_udint_at(&buffer, 0), 86_399_999);
        assert_eq!(get_tod_at(&buffer, 0), last);
    }

    #[test]
    fn test_tod_roundtrip() {
        let mut buffer = [0u8; 6];
        let tod = TimeOfDay::new(7, 8, 9, 10);
        set_tod_at(&mut buffer, 2, &tod);
        assert_eq!(get_tod_at(&buffer, 2), tod);
    }

    #[test]
    fn test_tod_unvalidated_hours() {
        // values beyond 24h decode into a large hour rather than failing
        assert_eq!(TimeOfDay::from_millis(u32::MAX).hour, 1193);
        assert_eq!(
            TimeOfDay::new(u32::MAX, 0, 0, 0).as_millis(),
            u32::MAX.wrapping_mul(MS_PER_HOUR)
        );
    }

    #[test]
    fn test_tod_display() {
        assert_eq!(TimeOfDay::new(9, 5, 3, 7).to_string(), "09:05:03.007");
    }
}
