//! Error types for the hashing entry points.
//!
//! The mixer itself is total. Errors only arise from caller contract
//! violations at the edges (a byte range longer than its buffer, a seed
//! string that does not parse) and all of them classify as
//! [`ErrorKind::InvalidArgument`].

use thiserror::Error;

/// Broad classification of a [`HashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed an argument outside the operation's domain.
    InvalidArgument,
}

/// An error from a hashing entry point.
///
/// # Example
///
/// ```
/// use hashmix::{hash_bytes, ErrorKind};
///
/// let err = hash_bytes(&[1, 2, 3], 4, 0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// assert!(err.to_string().contains("exceeds"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Requested prefix is longer than the buffer.
    #[error("length {length} exceeds buffer size {available}")]
    LengthOutOfRange {
        /// Requested number of bytes.
        length: usize,
        /// Bytes actually available.
        available: usize,
    },
    /// A configured seed could not be parsed as a 32-bit integer.
    #[error("invalid seed {value:?}: expected decimal or 0x-prefixed hex u32")]
    InvalidSeed {
        /// The rejected input.
        value: String,
    },
    /// Configuration text could not be decoded.
    #[error("invalid hash config: {0}")]
    InvalidConfig(String),
}

impl HashError {
    /// Creates a length-out-of-range error.
    #[must_use]
    pub const fn length_out_of_range(length: usize, available: usize) -> Self {
        Self::LengthOutOfRange { length, available }
    }

    /// Creates an invalid-seed error.
    #[must_use]
    pub fn invalid_seed(value: impl Into<String>) -> Self {
        Self::InvalidSeed {
            value: value.into(),
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthOutOfRange { .. } | Self::InvalidSeed { .. } | Self::InvalidConfig(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }

    /// Returns `true` if this is a buffer bounds violation.
    #[must_use]
    pub const fn is_length_out_of_range(&self) -> bool {
        matches!(self, Self::LengthOutOfRange { .. })
    }

    /// Returns `true` if this is a seed parse failure.
    #[must_use]
    pub const fn is_invalid_seed(&self) -> bool {
        matches!(self, Self::InvalidSeed { .. })
    }
}

/// Result type for hashing operations.
pub type HashResult<T> = Result<T, HashError>;
