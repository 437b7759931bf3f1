//! Packed binary-coded decimal helpers.
//!
//! One byte holds two decimal digits, tens in the high nibble and units in
//! the low nibble: `0x42` is 42. Used by the DATE_AND_TIME codec.

/// Decodes a packed BCD byte into its decimal value (0-99 for valid input).
///
/// # Example
///
/// ```
/// use s7_buffer::bcd::bcd_to_int;
///
/// assert_eq!(bcd_to_int(0x42), 42);
/// assert_eq!(bcd_to_int(0x09), 9);
/// ```
#[inline]
pub fn bcd_to_int(raw: u8) -> u8 {
    (raw >> 4) * 10 + (raw & 0x0F)
}

/// Packs a decimal value into one BCD byte.
///
/// Only 0-99 packs meaningfully; larger inputs produce an unspecified byte
/// but never panic.
///
/// # Example
///
/// ```
/// use s7_buffer::bcd::int_to_bcd;
///
/// assert_eq!(int_to_bcd(42), 0x42);
/// assert_eq!(int_to_bcd(0), 0x00);
/// ```
#[inline]
pub fn int_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcd_roundtrip_all_digits() {
        for value in 0..=99u8 {
            assert_eq!(bcd_to_int(int_to_bcd(value)), value);
        }
    }

    #[test]
    fn test_bcd_layout() {
        assert_eq!(int_to_bcd(99), 0x99);
        assert_eq!(int_to_bcd(10), 0x10);
        assert_eq!(bcd_to_int(0x90), 90);
    }

    #[test]
    fn test_out_of_range_does_not_panic() {
        let _ = int_to_bcd(255);
        let _ = bcd_to_int(0xFF);
    }
}
