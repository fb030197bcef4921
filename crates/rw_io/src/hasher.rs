//! crates/rw_io/src/hasher.rs
//!
//! SHA-256 digests of graphs. Digests are taken over the **canonical** JSON
//! form (sorted keys, compact), so formatting differences between files never
//! change the digest. Hex output is lowercase.

#![forbid(unsafe_code)]

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical_json::to_canonical_json_bytes;
use crate::IoResult;

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Digest of `value`'s canonical JSON.
pub fn sha256_canonical<T: Serialize>(value: &T) -> IoResult<String> {
    let v = serde_json::to_value(value)?;
    Ok(sha256_hex(&to_canonical_json_bytes(&v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn key_order_does_not_matter() {
        let a = sha256_canonical(&json!({"name": "A", "order": 1})).unwrap();
        let b = sha256_canonical(&json!({"order": 1, "name": "A"})).unwrap();
        assert_eq!(a, b);
    }
}
