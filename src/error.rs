//! Error types for decoding obfuscated addresses.
//!
//! Decoding is the only place untrusted input enters the crate, so it is the
//! only fallible operation: encoding cannot fail. All decode failures are
//! structured and surfaced to the caller; a bad token aborts the whole
//! decode, with no partial output.

use thiserror::Error;

/// Reasons a decode can fail.
///
/// Callers should treat these as input-validation failures, not transient
/// conditions; retrying the same input will fail the same way.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A token between delimiters did not parse as a base-10 integer
    #[error("malformed token {token:?} at index {index}: not a base-10 integer")]
    MalformedToken { index: usize, token: String },

    /// Removing the offset left a value outside the 16-bit code-unit range
    #[error("token {value} at index {index} maps outside the code-unit range 0..=65535")]
    CodeOutOfRange { index: usize, value: i64 },

    /// The decoded unit sequence contains a surrogate half with no partner
    #[error("decoded text contains an unpaired surrogate")]
    UnpairedSurrogate,
}

/// Type alias for Result with our DecodeError type
pub type Result<T> = std::result::Result<T, DecodeError>;
