//! Errors raised while reading caller-supplied byte buffers.
//!
//! Verification itself never fails: a bad signature is `false`, not an error.
use core::fmt;

/// Input parsing error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A buffer with a fixed layout has the wrong length.
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// A big-endian value has more significant bytes than its slot holds.
    ValueTooWide {
        /// Width of the slot in bytes.
        width: usize,
    },
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid input length: expected {expected} bytes, got {actual}")
            }
            Self::ValueTooWide { width } => {
                write!(f, "value does not fit in {width} bytes")
            }
        }
    }
}
