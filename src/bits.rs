//! Single-bit access within a byte of an S7 buffer.
//!
//! S7 addresses a boolean as `byte.bit`, e.g. `DB1.DBX4.3` is bit 3 of byte 4.
//! Bit 0 is the least significant bit.
//!
//! Bit indices outside `0..=7` are clamped rather than rejected: negative
//! indices address bit 0 and indices above 7 address bit 7.
//!
//! # Example
//!
//! ```
//! use s7_buffer::bits::{get_bit_at, set_bit_at};
//!
//! let mut buffer = [0u8; 2];
//!
//! set_bit_at(&mut buffer, 1, 3, true);
//! assert!(get_bit_at(&buffer, 1, 3));
//! assert_eq!(buffer, [0x00, 0x08]);
//! ```

/// Mask for each bit position, indexed 0..=7.
const BIT_MASK: [u8; 8] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];

#[inline]
fn clamp_bit(bit: i32) -> usize {
    let clamped = bit.clamp(0, 7);
    if clamped != bit {
        tracing::trace!(requested = bit, used = clamped, "bit index clamped");
    }
    clamped as usize
}

/// Gets a single bit from the byte at `pos`.
///
/// # Arguments
///
/// * `buffer` - Source buffer
/// * `pos` - Byte offset
/// * `bit` - Bit position, clamped into 0-7
///
/// # Panics
///
/// Panics if `pos` is outside `buffer`.
///
/// # Example
///
/// ```
/// use s7_buffer::bits::get_bit_at;
///
/// let buffer = [0b0000_0101u8];
/// assert!(get_bit_at(&buffer, 0, 0));
/// assert!(!get_bit_at(&buffer, 0, 1));
/// assert!(get_bit_at(&buffer, 0, 2));
/// // out-of-range indices are clamped
/// assert!(get_bit_at(&buffer, 0, -4));
/// ```
#[inline]
pub fn get_bit_at(buffer: &[u8], pos: usize, bit: i32) -> bool {
    (buffer[pos] & BIT_MASK[clamp_bit(bit)]) != 0
}

/// Sets or clears a single bit in the byte at `pos`, leaving the other bits untouched.
///
/// # Panics
///
/// Panics if `pos` is outside `buffer`.
///
/// # Example
///
/// ```
/// use s7_buffer::bits::set_bit_at;
///
/// let mut buffer = [0xFFu8];
/// set_bit_at(&mut buffer, 0, 7, false);
/// assert_eq!(buffer[0], 0x7F);
///
/// // index 12 is clamped to 7
/// set_bit_at(&mut buffer, 0, 12, true);
/// assert_eq!(buffer[0], 0xFF);
/// ```
#[inline]
pub fn set_bit_at(buffer: &mut [u8], pos: usize, bit: i32, value: bool) {
    let mask = BIT_MASK[clamp_bit(bit)];
    if value {
        buffer[pos] |= mask;
    } else {
        buffer[pos] &= !mask;
    }
}
