//! Fixed-width integer codecs.
//!
//! All S7 integers are stored big-endian (most significant byte first).
//!
//! | S7 type | Rust type | Size | Getter / setter |
//! |---------|-----------|:----:|-----------------|
//! | BYTE | `u8` | 1 | [`get_byte_at`] / [`set_byte_at`] |
//! | SINT | `i8` | 1 | [`get_sint_at`] / [`set_sint_at`] |
//! | WORD, UINT | `u16` | 2 | [`get_word_at`], [`get_uint_at`] / [`set_word_at`], [`set_uint_at`] |
//! | INT | `i16` | 2 | [`get_int_at`] / [`set_int_at`] |
//! | DWORD, UDINT | `u32` | 4 | [`get_dword_at`], [`get_udint_at`] / [`set_dword_at`], [`set_udint_at`] |
//! | DINT | `i32` | 4 | [`get_dint_at`] / [`set_dint_at`] |
//! | LWORD, ULINT | `u64` | 8 | [`get_lword_at`], [`get_ulint_at`] / [`set_lword_at`], [`set_ulint_at`] |
//! | LINT | `i64` | 8 | [`get_lint_at`] / [`set_lint_at`] |
//!
//! The WORD/DWORD/LWORD functions share the bit layout of their unsigned
//! integer counterparts; they exist so call sites can use the S7 vocabulary.
//!
//! Every function panics if `pos + size` exceeds the buffer. Use
//! [`read_value`](crate::read_value) for a checked alternative.
//!
//! # Example
//!
//! ```
//! use s7_buffer::int::{get_dint_at, set_dint_at};
//!
//! let mut buffer = [0u8; 4];
//! set_dint_at(&mut buffer, 0, -2);
//! assert_eq!(buffer, [0xFF, 0xFF, 0xFF, 0xFE]);
//! assert_eq!(get_dint_at(&buffer, 0), -2);
//! ```

#[inline]
fn read_array<const N: usize>(buffer: &[u8], pos: usize) -> [u8; N] {
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buffer[pos..pos + N]);
    bytes
}

#[inline]
fn write_array<const N: usize>(buffer: &mut [u8], pos: usize, bytes: [u8; N]) {
    buffer[pos..pos + N].copy_from_slice(&bytes);
}

/// Gets an unsigned byte (S7 BYTE, 0..255).
#[inline]
pub fn get_byte_at(buffer: &[u8], pos: usize) -> u8 {
    buffer[pos]
}

/// Sets an unsigned byte (S7 BYTE, 0..255).
#[inline]
pub fn set_byte_at(buffer: &mut [u8], pos: usize, value: u8) {
    buffer[pos] = value;
}

/// Gets a signed byte (S7 SINT, -128..127).
///
/// Raw values of 128 and above are negative.
///
/// # Example
///
/// ```
/// use s7_buffer::int::get_sint_at;
///
/// assert_eq!(get_sint_at(&[0x7F], 0), 127);
/// assert_eq!(get_sint_at(&[0x80], 0), -128);
/// assert_eq!(get_sint_at(&[0xFF], 0), -1);
/// ```
#[inline]
pub fn get_sint_at(buffer: &[u8], pos: usize) -> i8 {
    let raw = i16::from(buffer[pos]);
    if raw < 128 {
        raw as i8
    } else {
        (raw - 256) as i8
    }
}

/// Sets a signed byte (S7 SINT).
///
/// `value` is clamped into -128..=127 before it is stored.
///
/// # Example
///
/// ```
/// use s7_buffer::int::set_sint_at;
///
/// let mut buffer = [0u8; 2];
/// set_sint_at(&mut buffer, 0, -1);
/// set_sint_at(&mut buffer, 1, 1000); // clamped to 127
/// assert_eq!(buffer, [0xFF, 0x7F]);
/// ```
#[inline]
pub fn set_sint_at(buffer: &mut [u8], pos: usize, value: i32) {
    let clamped = value.clamp(i32::from(i8::MIN), i32::from(i8::MAX));
    if clamped != value {
        tracing::trace!(requested = value, stored = clamped, "SINT value clamped");
    }
    buffer[pos] = clamped as i8 as u8;
}

/// Gets a 16-bit unsigned value (S7 UINT, 0..65535).
#[inline]
pub fn get_uint_at(buffer: &[u8], pos: usize) -> u16 {
    u16::from_be_bytes(read_array(buffer, pos))
}

/// Sets a 16-bit unsigned value (S7 UINT, 0..65535).
#[inline]
pub fn set_uint_at(buffer: &mut [u8], pos: usize, value: u16) {
    write_array(buffer, pos, value.to_be_bytes());
}

/// Gets a 16-bit unsigned value (S7 WORD).
#[inline]
pub fn get_word_at(buffer: &[u8], pos: usize) -> u16 {
    get_uint_at(buffer, pos)
}

/// Sets a 16-bit unsigned value (S7 WORD).
#[inline]
pub fn set_word_at(buffer: &mut [u8], pos: usize, value: u16) {
    set_uint_at(buffer, pos, value);
}

/// Gets a 16-bit signed value (S7 INT, -32768..32767).
#[inline]
pub fn get_int_at(buffer: &[u8], pos: usize) -> i16 {
    i16::from_be_bytes(read_array(buffer, pos))
}

/// Sets a 16-bit signed value (S7 INT, -32768..32767).
#[inline]
pub fn set_int_at(buffer: &mut [u8], pos: usize, value: i16) {
    write_array(buffer, pos, value.to_be_bytes());
}

/// Gets a 32-bit unsigned value (S7 UDINT, 0..4294967295).
#[inline]
pub fn get_udint_at(buffer: &[u8], pos: usize) -> u32 {
    u32::from_be_bytes(read_array(buffer, pos))
}

/// Sets a 32-bit unsigned value (S7 UDINT, 0..4294967295).
#[inline]
pub fn set_udint_at(buffer: &mut [u8], pos: usize, value: u32) {
    write_array(buffer, pos, value.to_be_bytes());
}

/// Gets a 32-bit unsigned value (S7 DWORD).
#[inline]
pub fn get_dword_at(buffer: &[u8], pos: usize) -> u32 {
    get_udint_at(buffer, pos)
}

/// Sets a 32-bit unsigned value (S7 DWORD).
#[inline]
pub fn set_dword_at(buffer: &mut [u8], pos: usize, value: u32) {
    set_udint_at(buffer, pos, value);
}

/// Gets a 32-bit signed value (S7 DINT, -2147483648..2147483647).
#[inline]
pub fn get_dint_at(buffer: &[u8], pos: usize) -> i32 {
    i32::from_be_bytes(read_array(buffer, pos))
}

/// Sets a 32-bit signed value (S7 DINT, -2147483648..2147483647).
#[inline]
pub fn set_dint_at(buffer: &mut [u8], pos: usize, value: i32) {
    write_array(buffer, pos, value.to_be_bytes());
}

/// Gets a 64-bit unsigned value (S7 ULINT).
#[inline]
pub fn get_ulint_at(buffer: &[u8], pos: usize) -> u64 {
    u64::from_be_bytes(read_array(buffer, pos))
}

/// Sets a 64-bit unsigned value (S7 ULINT).
#[inline]
pub fn set_ulint_at(buffer: &mut [u8], pos: usize, value: u64) {
    write_array(buffer, pos, value.to_be_bytes());
}

/// Gets a 64-bit unsigned value (S7 LWORD).
#[inline]
pub fn get_lword_at(buffer: &[u8], pos: usize) -> u64 {
    get_ulint_at(buffer, pos)
}

/// Sets a 64-bit unsigned value (S7 LWORD).
#[inline]
pub fn set_lword_at(buffer: &mut [u8], pos: usize, value: u64) {
    set_ulint_at(buffer, pos, value);
}

/// Gets a 64-bit signed value (S7 LINT).
#[inline]
pub fn get_lint_at(buffer: &[u8], pos: usize) -> i64 {
    i64::from_be_bytes(read_array(buffer, pos))
}

/// Sets a 64-bit signed value (S7 LINT).
#[inline]
pub fn set_lint_at(buffer: &mut [u8], pos: usize, value: i64) {
    write_array(buffer, pos, value.to_be_bytes());
}
