//! Text input: one name per line.
//!
//! Surrounding whitespace is trimmed and blank lines are dropped; the first
//! remaining line becomes rank 1.

use rw_core::{CoreError, ItemName};

pub fn parse_names(text: &str) -> Result<Vec<ItemName>, CoreError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect()
}
