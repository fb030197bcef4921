//! Graph files: load (read with limits → JSON → schema → typed decode →
//! structural checks) and save (pretty JSON, atomic write).
//!
//! A load never recomputes anything; values are trusted once they pass the
//! checks below. Callers keep their previous graph when a load fails.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rw_algo::validate_rank_set;
use rw_core::{entities::ensure_unique, Alternative, DecisionGraph, RankedItem};
use serde_json::Value;
use tracing::{debug, info};

use crate::{canonical_json, hasher, IoError, IoResult};

/// Upper bound on graph file size.
pub const MAX_GRAPH_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGraph {
    pub graph: DecisionGraph,
    /// SHA-256 of the canonical JSON of `graph`.
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGraph {
    /// Final path written (`.json` appended when the request had no extension).
    pub path: PathBuf,
    pub sha256: String,
}

// ----------------------------- Load -----------------------------

pub fn load_graph(path: &Path) -> IoResult<LoadedGraph> {
    let bytes = read_with_limit(path)?;
    let graph = parse_graph_bytes(&bytes)?;
    let sha256 = hasher::sha256_canonical(&graph)?;
    info!(
        path = %path.display(),
        criteria = graph.criteria.len(),
        alternatives = graph.alternatives.len(),
        %sha256,
        "graph loaded"
    );
    Ok(LoadedGraph { graph, sha256 })
}

pub fn parse_graph_bytes(bytes: &[u8]) -> IoResult<DecisionGraph> {
    let v: Value = serde_json::from_slice(bytes)?;
    parse_graph_value(v)
}

pub fn parse_graph_value(v: Value) -> IoResult<DecisionGraph> {
    #[cfg(feature = "schemaval")]
    crate::schema::validate_graph_value(&v)?;

    let graph: DecisionGraph = serde_json::from_value(v)?;
    check_structure(&graph)?;
    Ok(graph)
}

fn read_with_limit(path: &Path) -> IoResult<Vec<u8>> {
    let f = File::open(path).map_err(|e| IoError::LoadIo(format!("{}: {e}", path.display())))?;
    let len = f
        .metadata()
        .map_err(|e| IoError::LoadIo(format!("{}: {e}", path.display())))?
        .len();
    if len > MAX_GRAPH_BYTES {
        return Err(IoError::LoadIo(format!(
            "{}: {len} bytes exceeds limit of {MAX_GRAPH_BYTES}",
            path.display()
        )));
    }
    let mut buf = Vec::with_capacity(len as usize);
    f.take(MAX_GRAPH_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| IoError::LoadIo(format!("{}: {e}", path.display())))?;
    if buf.len() as u64 > MAX_GRAPH_BYTES {
        return Err(IoError::LoadIo(format!("{}: exceeds size limit", path.display())));
    }
    debug!(path = %path.display(), bytes = buf.len(), "read graph file");
    Ok(buf)
}

/// Cross-item rules the schema cannot express:
/// - every sibling set has unique names and ranks forming `1..=N`;
/// - every criterion holds exactly the global alternative names;
/// - weights are finite and within `[0, 1]`, scores finite and `≥ 0`.
pub fn check_structure(g: &DecisionGraph) -> IoResult<()> {
    check_siblings(&g.criteria, "/criteria")?;
    check_siblings(&g.alternatives, "/alternatives")?;
    check_scores(&g.alternatives, "/alternatives")?;

    let global: BTreeSet<&str> = g.alternatives.iter().map(|a| a.name.as_str()).collect();
    for (i, c) in g.criteria.iter().enumerate() {
        let pointer = format!("/criteria/{i}/alternatives");
        check_siblings(&c.alternatives, &pointer)?;
        check_scores(&c.alternatives, &pointer)?;

        let local: BTreeSet<&str> = c.alternatives.iter().map(|a| a.name.as_str()).collect();
        if local != global {
            return Err(IoError::parse(
                pointer,
                format!("alternatives of criterion {:?} do not match the global alternative list", c.name.as_str()),
            ));
        }
    }
    Ok(())
}

fn check_siblings<T: RankedItem>(items: &[T], pointer: &str) -> IoResult<()> {
    ensure_unique(items.iter().map(|i| i.name())).map_err(|e| IoError::parse(pointer, e.to_string()))?;

    let orders: Vec<u32> = items.iter().map(|i| i.order()).collect();
    validate_rank_set(&orders).map_err(|e| IoError::parse(pointer, e.to_string()))?;

    for (idx, item) in items.iter().enumerate() {
        let w = item.weight();
        if !w.is_finite() || !(0.0..=1.0).contains(&w) {
            return Err(IoError::parse(
                format!("{pointer}/{idx}/weight"),
                format!("weight {w} outside [0, 1]"),
            ));
        }
    }
    Ok(())
}

fn check_scores(items: &[Alternative], pointer: &str) -> IoResult<()> {
    for (idx, alt) in items.iter().enumerate() {
        if !alt.score.is_finite() || alt.score < 0.0 {
            return Err(IoError::parse(
                format!("{pointer}/{idx}/score"),
                format!("score {} is negative or not finite", alt.score),
            ));
        }
    }
    Ok(())
}

// ----------------------------- Save -----------------------------

/// Append `.json` when `path` has no extension.
pub fn with_json_extension(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("json")
    } else {
        path.to_path_buf()
    }
}

pub fn save_graph(path: &Path, graph: &DecisionGraph) -> IoResult<SavedGraph> {
    let path = with_json_extension(path);
    let bytes = serde_json::to_vec_pretty(graph)
        .map_err(|e| IoError::SaveIo(format!("serialize: {e}")))?;
    canonical_json::write_atomic(&path, &bytes)
        .map_err(|e| IoError::SaveIo(format!("{}: {e}", path.display())))?;
    let sha256 = hasher::sha256_canonical(graph)?;
    info!(path = %path.display(), %sha256, "graph saved");
    Ok(SavedGraph { path, sha256 })
}
