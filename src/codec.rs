//! Encoding and decoding of obfuscated addresses.
//!
//! The encoder turns a text string into a `.`-joined list of signed decimal
//! tokens, one per UTF-16 code unit:
//!
//! ```text
//! "hi"  ->  'h' (0x0068, index 0, even)  ->  0x0068 + 0x66CCFF =   6737255
//!           'i' (0x0069, index 1, odd)   ->  0x0069 - 0xEE0000 = -15597463
//!       ->  "6737255.-15597463"
//! ```
//!
//! # Wire Format
//!
//! A sequence of base-10 signed integers separated by `.` (0x2E), with no
//! leading or trailing delimiter, no whitespace, and no escaping. Tokens are
//! decimal renderings of integers, so the delimiter can never collide with
//! token content. The empty string encodes the empty string.
//!
//! # Code Units, Not Code Points
//!
//! Text is processed per UTF-16 code unit, matching the browser-side decoder
//! this format is shared with. Characters outside the Basic Multilingual
//! Plane are split into their two surrogate units and shifted independently;
//! both units round-trip, so the character is reconstructed intact.
//!
//! # Example
//!
//! ```
//! let encoded = mailcloak::encode("a@b.c");
//! assert_eq!(mailcloak::decode(&encoded).unwrap(), "a@b.c");
//! ```

use crate::error::{DecodeError, Result};
use crate::offset;

/// Token separator in the encoded form.
const DELIMITER: &str = ".";

/// Encode a text string into its obfuscated form.
///
/// Each UTF-16 code unit is shifted by the offset for its index and rendered
/// as a signed decimal token; tokens are joined with `.`.
///
/// Never fails: every string has an encoding, and the empty string encodes
/// to the empty string.
pub fn encode(text: &str) -> String {
    let tokens: Vec<String> = text
        .encode_utf16()
        .enumerate()
        .map(|(index, unit)| offset::shift(index, unit).to_string())
        .collect();

    tokens.join(DELIMITER)
}

/// Decode an obfuscated string back into text.
///
/// Splits the input on `.`, parses each token as a base-10 integer, removes
/// the offset for its index, and rebuilds the string from the resulting
/// code units.
///
/// Empty input returns the empty string. Splitting `""` would yield a single
/// empty token, but the encoder maps `""` to `""`, so the round-trip
/// identity requires the special case.
///
/// # Errors
/// - `DecodeError::MalformedToken` if a token is not a base-10 integer
///   (this includes empty tokens, embedded whitespace, and magnitudes
///   beyond i64)
/// - `DecodeError::CodeOutOfRange` if a token's unshifted value leaves the
///   range `0..=0xFFFF`
/// - `DecodeError::UnpairedSurrogate` if the unit sequence is not valid
///   UTF-16
pub fn decode(encoded: &str) -> Result<String> {
    if encoded.is_empty() {
        return Ok(String::new());
    }

    let mut units = Vec::new();
    for (index, token) in encoded.split(DELIMITER).enumerate() {
        let value: i64 = token.parse().map_err(|_| DecodeError::MalformedToken {
            index,
            token: token.to_string(),
        })?;

        let unit = offset::unshift(index, value)
            .filter(|unit| (0..=i64::from(u16::MAX)).contains(unit))
            .ok_or(DecodeError::CodeOutOfRange { index, value })?;

        units.push(unit as u16);
    }

    String::from_utf16(&units).map_err(|_| DecodeError::UnpairedSurrogate)
}
