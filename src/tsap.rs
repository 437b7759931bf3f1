//! TSAP (Transport Service Access Point) parsing.
//!
//! Connection parameters give TSAPs as two dotted hex octets, e.g. `"10.02"`
//! for `0x1002`. [`word_from_tsap`] is the permissive parser used when setting
//! up a connection; [`Tsap`] parses strictly and reports failures.
//!
//! # Example
//!
//! ```
//! use s7_buffer::{word_from_tsap, Tsap};
//!
//! assert_eq!(word_from_tsap("10.02"), 0x1002);
//! assert_eq!(word_from_tsap("noDot"), 0);
//!
//! let tsap: Tsap = "03.01".parse().unwrap();
//! assert_eq!(u16::from(tsap), 0x0301);
//! assert!("03.zz".parse::<Tsap>().is_err());
//! ```

use std::str::FromStr;

use crate::error::{Result, S7Error};

/// Parses the leading hex digits of `text` the way `strtol(.., 16)` does and
/// keeps the low byte. Leading whitespace and a `0x` prefix are skipped;
/// parsing stops at the first non-hex character.
fn leading_hex_octet(text: &str) -> u8 {
    let text = text.trim_start();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, digit| (acc << 4) | digit) as u8
}

/// Converts a dotted hex TSAP such as `"10.02"` to its 16-bit value.
///
/// Text without a `.` yields 0. Each side is read up to its first non-hex
/// character, and only the first two characters after the dot are considered.
pub fn word_from_tsap(text: &str) -> u16 {
    let Some((first, rest)) = text.split_once('.') else {
        tracing::trace!(tsap = text, "TSAP has no '.' delimiter");
        return 0;
    };
    let second: String = rest.chars().take(2).collect();
    (u16::from(leading_hex_octet(first)) << 8) | u16::from(leading_hex_octet(&second))
}

/// A TSAP as its high and low octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tsap(pub u8, pub u8);

impl Tsap {
    /// High octet.
    #[inline]
    pub fn high(&self) -> u8 {
        self.0
    }

    /// Low octet.
    #[inline]
    pub fn low(&self) -> u8 {
        self.1
    }
}

impl From<Tsap> for u16 {
    #[inline]
    fn from(tsap: Tsap) -> Self {
        (u16::from(tsap.0) << 8) | u16::from(tsap.1)
    }
}

impl From<u16> for Tsap {
    #[inline]
    fn from(value: u16) -> Self {
        let [high, low] = value.to_be_bytes();
        Tsap(high, low)
    }
}

impl std::fmt::Display for Tsap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}.{:02X}", self.0, self.1)
    }
}

fn parse_octet(part: &str) -> Result<u8> {
    if part.is_empty() || part.len() > 2 {
        return Err(S7Error::invalid_tsap(format!(
            "'{part}' must be one or two hex digits"
        )));
    }
    u8::from_str_radix(part, 16)
        .map_err(|_| S7Error::invalid_tsap(format!("'{part}' is not a hex octet")))
}

impl FromStr for Tsap {
    type Err = S7Error;

    /// Parses `"HH.LL"` where each side is one or two hex digits.
    fn from_str(s: &str) -> Result<Self> {
        let (high, low) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| S7Error::invalid_tsap("missing '.' delimiter"))?;
        Ok(Tsap(parse_octet(high)?, parse_octet(low)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_from_tsap() {
        assert_eq!(word_from_tsap("10.02"), 0x1002);
        assert_eq!(word_from_tsap("01.00"), 0x0100);
        assert_eq!(word_from_tsap("3.1"), 0x0301);
        assert_eq!(word_from_tsap("FF.ff"), 0xFFFF);
    }

    #[test]
    fn test_word_from_tsap_without_dot() {
        assert_eq!(word_from_tsap("noDot"), 0);
        assert_eq!(word_from_tsap(""), 0);
        assert_eq!(word_from_tsap("1002"), 0);
    }

    #[test]
    fn test_word_from_tsap_is_permissive() {
        // second part only looks at two characters
        assert_eq!(word_from_tsap("10.02FF"), 0x1002);
        // parsing stops at the first non-hex character
        assert_eq!(word_from_tsap("1z.0g"), 0x0100);
        assert_eq!(word_from_tsap("zz.zz"), 0);
        // a wider first part keeps only its low byte
        assert_eq!(word_from_tsap("123.04"), 0x2304);
        assert_eq!(word_from_tsap(" 0x10.1"), 0x1001);
    }

    #[test]
    fn test_tsap_strict_parse() {
        assert_eq!("10.02".parse::<Tsap>(), Ok(Tsap(0x10, 0x02)));
        assert_eq!(" a.B ".parse::<Tsap>(), Ok(Tsap(0x0A, 0x0B)));
        assert!("1002".parse::<Tsap>().is_err());
        assert!("100.2".parse::<Tsap>().is_err());
        assert!("10.".parse::<Tsap>().is_err());
        assert!("1g.02".parse::<Tsap>().is_err());
    }

    #[test]
    fn test_tsap_conversions() {
        let tsap = Tsap::from(0x0302u16);
        assert_eq!(tsap.high(), 0x03);
        assert_eq!(tsap.low(), 0x02);
        assert_eq!(u16::from(tsap), 0x0302);
        assert_eq!(tsap.to_string(), "03.02");
    }
}
