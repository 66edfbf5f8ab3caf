//! Error types for Tagwire operations.

use thiserror::Error;

/// Result type for Tagwire operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Tagwire operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown type tag encountered during decoding.
    #[error("unknown type tag: {0}")]
    UnknownTypeTag(u8),

    /// A read would extend past the end of the input buffer.
    #[error("out of bounds read: needed {needed} bytes, only {available} available")]
    OutOfBoundsRead { needed: usize, available: usize },

    /// Top-level consistency failure: the cursor ran past the buffer.
    #[error("corrupt data: cursor at {pos} past buffer length {len}")]
    CorruptData { pos: usize, len: usize },

    /// A length exceeds the capacity of its fixed-width wire field.
    #[error("length overflow: {len} exceeds field maximum {max}")]
    LengthOverflow { len: usize, max: u64 },

    /// Invalid UTF-8 in a string or map key payload.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,
}

impl Error {
    /// Creates an out-of-bounds read error.
    pub fn out_of_bounds(needed: usize, available: usize) -> Self {
        Self::OutOfBoundsRead { needed, available }
    }

    /// Creates a corrupt data error.
    pub fn corrupt_data(pos: usize, len: usize) -> Self {
        Self::CorruptData { pos, len }
    }

    /// Creates a length overflow error.
    pub fn length_overflow(len: usize, max: u64) -> Self {
        Self::LengthOverflow { len, max }
    }
}
