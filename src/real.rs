//! IEEE-754 floating point codecs (S7 REAL and LREAL).
//!
//! Values are moved as raw bit patterns through the unsigned integer codecs,
//! never converted numerically, so NaN payloads and signed zero survive a
//! write/read cycle unchanged.

use crate::int::{get_udint_at, get_ulint_at, set_udint_at, set_ulint_at};

/// Gets a 32-bit float (S7 REAL) from 4 big-endian bytes.
///
/// # Example
///
/// ```
/// use s7_buffer::real::get_real_at;
///
/// let buffer = [0x40, 0x49, 0x0F, 0xDB];
/// assert_eq!(get_real_at(&buffer, 0), std::f32::consts::PI);
/// ```
#[inline]
pub fn get_real_at(buffer: &[u8], pos: usize) -> f32 {
    f32::from_bits(get_udint_at(buffer, pos))
}

/// Sets a 32-bit float (S7 REAL) as 4 big-endian bytes.
#[inline]
pub fn set_real_at(buffer: &mut [u8], pos: usize, value: f32) {
    set_udint_at(buffer, pos, value.to_bits());
}

/// Gets a 64-bit float (S7 LREAL) from 8 big-endian bytes.
#[inline]
pub fn get_lreal_at(buffer: &[u8], pos: usize) -> f64 {
    f64::from_bits(get_ulint_at(buffer, pos))
}

/// Sets a 64-bit float (S7 LREAL) as 8 big-endian bytes.
///
/// # Example
///
/// ```
/// use s7_buffer::real::{get_lreal_at, set_lreal_at};
///
/// let mut buffer = [0u8; 8];
/// set_lreal_at(&mut buffer, 0, -0.0);
/// assert_eq!(buffer[0], 0x80);
/// assert!(get_lreal_at(&buffer, 0).is_sign_negative());
/// ```
#[inline]
pub fn set_lreal_at(buffer: &mut [u8], pos: usize, value: f64) {
    set_ulint_at(buffer, pos, value.to_bits());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_layout() {
        let mut buffer = [0u8; 4];
        set_real_at(&mut buffer, 0, 1.0);
        assert_eq!(buffer, [0x3F, 0x80, 0x00, 0x00]);
        set_real_at(&mut buffer, 0, -2.5);
        assert_eq!(buffer, [0xC0, 0x20, 0x00, 0x00]);
        assert_eq!(get_real_at(&buffer, 0), -2.5);
    }

    #[test]
    fn test_real_preserves_bit_patterns() {
        let mut buffer = [0u8; 4];
        let patterns = [
            0.0f32.to_bits(),
            (-0.0f32).to_bits(),
            f32::INFINITY.to_bits(),
            f32::NEG_INFINITY.to_bits(),
            f32::NAN.to_bits(),
            0x7FC0_1234, // quiet NaN with payload
            0x7F80_0001, // signalling NaN
            f32::MIN_POSITIVE.to_bits(),
            1u32, // smallest subnormal
            3.14159f32.to_bits(),
        ];
        for bits in patterns {
            set_real_at(&mut buffer, 0, f32::from_bits(bits));
            assert_eq!(buffer, bits.to_be_bytes());
            assert_eq!(get_real_at(&buffer, 0).to_bits(), bits);
        }
    }

    #[test]
    fn test_lreal_layout() {
        let mut buffer = [0u8; 8];
        set_lreal_at(&mut buffer, 0, 1.0);
        assert_eq!(buffer, [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(get_lreal_at(&buffer, 0), 1.0);
    }

    #[test]
    fn test_lreal_preserves_bit_patterns() {
        let mut buffer = [0u8; 10];
        let patterns = [
            0.0f64.to_bits(),
            (-0.0f64).to_bits(),
            f64::INFINITY.to_bits(),
            f64::NEG_INFINITY.to_bits(),
            f64::NAN.to_bits(),
            0x7FF8_0000_DEAD_BEEF,
            f64::MAX.to_bits(),
            std::f64::consts::E.to_bits(),
        ];
        for bits in patterns {
            set_lreal_at(&mut buffer, 2, f64::from_bits(bits));
            assert_eq!(&buffer[2..], &bits.to_be_bytes());
            assert_eq!(get_lreal_at(&buffer, 2).to_bits(), bits);
        }
    }
}
