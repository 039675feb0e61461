//! mailcloak: reversible obfuscation for email addresses embedded in web pages.
//!
//! Plain-text addresses in generated markup are easy prey for scrapers. This
//! crate implements the lightweight, reversible transform used to hide them:
//! each UTF-16 code unit of the address is shifted by a position-dependent
//! offset, and the shifted values are emitted as a `.`-joined decimal string.
//! A matching decoder (here, and in the browser script shipped with the
//! generated pages) reverses the transform.
//!
//! This is obfuscation, not encryption: the offsets are fixed public
//! constants, and the only goal is to keep addresses away from naive
//! harvesters.
//!
//! # Architecture
//!
//! - `offset`: position-dependent shift arithmetic
//! - `error`: structured decode errors
//! - `codec`: the public encode/decode pair
//!
//! # Design Principles
//!
//! - **No panics**: decoding untrusted input returns structured errors
//! - **Pure functions**: no state, no I/O; safe to call from any thread
//! - **Exact round trips**: `decode(encode(s))` returns `s` for every string
//!
//! # Example
//!
//! ```
//! use mailcloak::{decode, encode};
//!
//! let encoded = encode("someone@example.com");
//! assert_eq!(decode(&encoded).unwrap(), "someone@example.com");
//! ```

pub mod codec;
pub mod error;
mod offset;

// Re-export commonly used items
pub use codec::{decode, encode};
pub use error::{DecodeError, Result};
