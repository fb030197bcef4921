//! crates/rw_io/src/lib.rs
//! Persistence for the rank-weight engine.
//!
//! - Shared error type (`IoError`) mapping onto the load/save failure kinds.
//! - Graph files: read with limits → schema → typed decode → structural checks.
//! - Saves are pretty JSON written atomically; digests use canonical JSON.
//! - Request/response envelopes for hosts that drive save/load from dialogs.
//!
//! Nothing here recomputes weights: a load is a pure state restore.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for rw_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Content is not JSON, fails the schema, or breaks a structural rule.
    /// `pointer` is a JSON Pointer to the offending location (`/` for the root).
    #[error("load parse error at {pointer}: {msg}")]
    LoadParse { pointer: String, msg: String },

    /// Reading the source failed (missing file, permissions, size limit).
    #[error("load io error: {0}")]
    LoadIo(String),

    /// Writing the destination failed.
    #[error("save io error: {0}")]
    SaveIo(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl IoError {
    pub(crate) fn parse(pointer: impl Into<String>, msg: impl Into<String>) -> Self {
        IoError::LoadParse { pointer: pointer.into(), msg: msg.into() }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json does not keep a pointer; report the root.
        IoError::parse("/", e.to_string())
    }
}

pub mod canonical_json;
pub mod graph_file;
pub mod hasher;
pub mod requests;
#[cfg(feature = "schemaval")]
pub mod schema;

pub use graph_file::{load_graph, parse_graph_bytes, save_graph, LoadedGraph, SavedGraph};
pub use requests::{handle_load_request, handle_save_request, LoadResponse, SaveResponse};

pub mod prelude {
    pub use crate::{IoError, IoResult};
    pub use crate::canonical_json::{to_canonical_json_bytes, write_atomic};
    pub use crate::graph_file::{load_graph, save_graph};
    pub use crate::hasher::{sha256_canonical, sha256_hex};
}
