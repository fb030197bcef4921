//! Minimal error set for core-domain validation.

use alloc::string::String;
use core::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CoreError {
    /// Name is empty after trimming, or contains a line break.
    InvalidName(String),
    /// Two siblings share the same name.
    DuplicateName(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidName(s) => write!(f, "invalid item name: {s:?}"),
            CoreError::DuplicateName(s) => write!(f, "duplicate item name: {s}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
