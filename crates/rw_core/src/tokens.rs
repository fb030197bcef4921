//! `ItemName`: the display name of a criterion or alternative.
//!
//! Names come from one line of user text, so the rules are simple: the stored
//! value is trimmed, non-empty, and carries no line breaks. Names are compared
//! byte-wise; that comparison is the tie-break used for final rankings.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[inline]
fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.trim() == s && !s.contains(|c| c == '\n' || c == '\r')
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ItemName(String);

impl ItemName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemName {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_name(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidName(s.to_string()))
        }
    }
}

impl TryFrom<String> for ItemName {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_valid_name(&s) {
            Ok(Self(s))
        } else {
            Err(CoreError::InvalidName(s))
        }
    }
}

impl From<ItemName> for String {
    fn from(n: ItemName) -> Self {
        n.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ItemName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
