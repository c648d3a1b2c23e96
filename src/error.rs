//! Errors reported by the parser and by the operations that allocate words.

extern crate alloc;

use alloc::collections::TryReserveError;
use core::fmt::{Debug, Display};

/// The error type for parsing and multiplying big numbers.
///
/// Errors caused by the input (`InputEmpty`, `InvalidDigit`) are kept apart
/// from resource exhaustion (`AllocationFailed`) so callers can decide which
/// ones to report and which ones to retry.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The decimal string was empty.
    InputEmpty,
    /// The decimal string contained something other than `0..=9`.
    InvalidDigit { index: usize, found: char },
    /// The word storage could not be allocated or grown.
    AllocationFailed,
}

impl Error {
    /// Returns true if the error was caused by a malformed decimal string.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InputEmpty | Error::InvalidDigit { .. })
    }

    /// Returns true if the error was caused by running out of memory.
    pub fn is_allocation(&self) -> bool {
        matches!(self, Error::AllocationFailed)
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocationFailed
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InputEmpty => f.write_str(
                "Invalid decimal string (only non-negative integers allowed)",
            ),
            Error::InvalidDigit { index, found } => write!(
                f,
                "Invalid decimal string (only non-negative integers allowed): \
                 unexpected {:?} at index {}",
                found, index
            ),
            Error::AllocationFailed => f.write_str("memory allocation failed"),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[test]
fn test_error_kinds() {
    let empty = Error::InputEmpty;
    let digit = Error::InvalidDigit {
        index: 2,
        found: 'a',
    };
    let alloc = Error::AllocationFailed;

    assert!(empty.is_invalid_format());
    assert!(digit.is_invalid_format());
    assert!(!alloc.is_invalid_format());
    assert!(alloc.is_allocation());
    assert!(!digit.is_allocation());
}

#[cfg(feature = "std")]
#[test]
fn test_error_messages() {
    use std::string::ToString;

    assert_eq!(
        Error::InputEmpty.to_string(),
        "Invalid decimal string (only non-negative integers allowed)"
    );
    assert_eq!(
        Error::InvalidDigit {
            index: 0,
            found: '-'
        }
        .to_string(),
        "Invalid decimal string (only non-negative integers allowed): \
         unexpected '-' at index 0"
    );
    assert_eq!(
        Error::AllocationFailed.to_string(),
        "memory allocation failed"
    );
}
