//! S7 STRING and ARRAY OF CHAR codecs.
//!
//! An S7 STRING carries a two-byte header:
//!
//! | Byte | Content |
//! |------|---------|
//! | 0 | Declared maximum length |
//! | 1 | Current length |
//! | 2.. | Characters |
//!
//! An ARRAY OF CHAR is plain bytes with no header.
//!
//! CHAR is an 8-bit type. The `*_bytes_at` functions move payload bytes
//! unchanged; the text functions map each byte to the `char` of the same
//! value (ISO 8859-1), so every byte survives a read and write back.
//!
//! # Example
//!
//! ```
//! use s7_buffer::string::{get_string_at, set_string_at};
//!
//! let mut buffer = [0u8; 12];
//! set_string_at(&mut buffer, 0, 10, "AB");
//! assert_eq!(&buffer[..4], &[10, 2, b'A', b'B']);
//! assert_eq!(get_string_at(&buffer, 0), "AB");
//! ```

/// Maximum number of payload bytes an S7 STRING can hold.
pub const MAX_STRING_LEN: usize = 254;

/// Size of the STRING header (maximum length + current length).
pub const STRING_HEADER_SIZE: usize = 2;

/// Returns the number of bytes a STRING declared with `max_len` occupies.
///
/// # Example
///
/// ```
/// use s7_buffer::string::string_size;
///
/// assert_eq!(string_size(10), 12);
/// assert_eq!(string_size(300), 256); // capped at 254 characters
/// ```
pub fn string_size(max_len: usize) -> usize {
    STRING_HEADER_SIZE + max_len.min(MAX_STRING_LEN)
}

/// Decodes 8-bit CHAR data, one byte per `char` (ISO 8859-1).
fn decode_chars(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encodes text as 8-bit CHAR data. Characters above U+00FF have no CHAR
/// representation and are stored as `?`.
fn encode_chars(value: &str) -> Vec<u8> {
    value
        .chars()
        .map(|c| match u8::try_from(c) {
            Ok(b) => b,
            Err(_) => {
                tracing::debug!(char = %c, "character outside CHAR range replaced");
                b'?'
            }
        })
        .collect()
}

/// Gets the payload bytes of an S7 STRING.
///
/// Exactly `current length` bytes are returned; the declared maximum
/// is not consulted.
///
/// # Panics
///
/// Panics if the header or the payload it announces lies outside `buffer`.
pub fn get_string_bytes_at(buffer: &[u8], pos: usize) -> &[u8] {
    let len = usize::from(buffer[pos + 1]);
    let start = pos + STRING_HEADER_SIZE;
    &buffer[start..start + len]
}

/// Sets an S7 STRING from raw payload bytes with the given declared maximum length.
///
/// The payload is capped at [`MAX_STRING_LEN`] bytes; the stored current
/// length always matches the bytes written.
///
/// # Panics
///
/// Panics if the header or the payload lies outside `buffer`.
pub fn set_string_bytes_at(buffer: &mut [u8], pos: usize, max_len: u8, bytes: &[u8]) {
    let len = bytes.len().min(MAX_STRING_LEN);
    if len < bytes.len() {
        tracing::debug!(
            requested = bytes.len(),
            written = len,
            "STRING payload capped"
        );
    }
    buffer[pos] = max_len;
    buffer[pos + 1] = len as u8;
    let start = pos + STRING_HEADER_SIZE;
    buffer[start..start + len].copy_from_slice(&bytes[..len]);
}

/// Gets an S7 STRING as text. Each payload byte becomes one `char`.
///
/// # Panics
///
/// Panics if the header or the payload it announces lies outside `buffer`.
///
/// # Example
///
/// ```
/// use s7_buffer::string::get_string_at;
///
/// let buffer = [10, 4, b'2', b'5', 0xB0, b'C'];
/// assert_eq!(get_string_at(&buffer, 0), "25\u{B0}C");
/// ```
pub fn get_string_at(buffer: &[u8], pos: usize) -> String {
    decode_chars(get_string_bytes_at(buffer, pos))
}

/// Sets an S7 STRING from text, one byte per `char`.
///
/// # Panics
///
/// Panics if the header or the payload lies outside `buffer`.
pub fn set_string_at(buffer: &mut [u8], pos: usize, max_len: u8, value: &str) {
    set_string_bytes_at(buffer, pos, max_len, &encode_chars(value));
}

/// Gets the raw bytes of an ARRAY OF CHAR of exactly `size` bytes.
///
/// # Panics
///
/// Panics if `pos + size` exceeds the buffer.
pub fn get_char_bytes_at(buffer: &[u8], pos: usize, size: usize) -> &[u8] {
    &buffer[pos..pos + size]
}

/// Sets an ARRAY OF CHAR from raw bytes, truncating to the room left after `pos`.
///
/// Bytes past the written characters are left untouched.
///
/// # Panics
///
/// Panics if `pos` is greater than the buffer length.
pub fn set_char_bytes_at(buffer: &mut [u8], pos: usize, bytes: &[u8]) {
    let max_len = buffer.len().saturating_sub(pos);
    let size = bytes.len().min(max_len);
    if size < bytes.len() {
        tracing::debug!(max_len, size = bytes.len(), "ARRAY OF CHAR truncated");
    }
    buffer[pos..pos + size].copy_from_slice(&bytes[..size]);
}

/// Gets an ARRAY OF CHAR of exactly `size` bytes as text.
///
/// # Panics
///
/// Panics if `pos + size` exceeds the buffer.
pub fn get_chars_at(buffer: &[u8], pos: usize, size: usize) -> String {
    decode_chars(get_char_bytes_at(buffer, pos, size))
}

/// Sets an ARRAY OF CHAR from text, truncating to the room left after `pos`.
///
/// # Panics
///
/// Panics if `pos` is greater than the buffer length.
///
/// # Example
///
/// ```
/// use s7_buffer::string::set_chars_at;
///
/// let mut buffer = [0u8; 6];
/// set_chars_at(&mut buffer, 2, "ABCDEFGHIJ");
/// assert_eq!(&buffer, b"\0\0ABCD");
/// ```
pub fn set_chars_at(buffer: &mut [u8], pos: usize, value: &str) {
    set_char_bytes_at(buffer, pos, &encode_chars(value));
}
