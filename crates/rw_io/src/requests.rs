//! Save/load request-response envelopes.
//!
//! Hosts that pick paths through dialogs call these and forward the response
//! as-is. A canceled dialog is passed as `None`; it is reported as a failure
//! with no data and never touches the filesystem.

use std::path::Path;

use rw_core::DecisionGraph;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::graph_file::{load_graph, save_graph};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    /// Path written; empty when canceled or failed.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResponse {
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DecisionGraph>,
}

pub fn handle_save_request(target: Option<&Path>, graph: &DecisionGraph) -> SaveResponse {
    let Some(target) = target else {
        return SaveResponse { success: false, path: String::new() };
    };
    match save_graph(target, graph) {
        Ok(saved) => SaveResponse { success: true, path: saved.path.display().to_string() },
        Err(e) => {
            warn!(error = %e, "save request failed");
            SaveResponse { success: false, path: String::new() }
        }
    }
}

pub fn handle_load_request(source: Option<&Path>) -> LoadResponse {
    let Some(source) = source else {
        return LoadResponse { success: false, message: "No file selected".into(), data: None };
    };
    match load_graph(source) {
        Ok(loaded) => LoadResponse {
            success: true,
            message: "Data loaded successfully".into(),
            data: Some(loaded.graph),
        },
        Err(e) => {
            warn!(error = %e, "load request failed");
            LoadResponse { success: false, message: format!("Failed to load data: {e}"), data: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> DecisionGraph {
        DecisionGraph::seed(vec!["Cost".parse().unwrap()], vec!["A".parse().unwrap()]).unwrap()
    }

    #[test]
    fn canceled_requests_report_failure_without_data() {
        assert_eq!(handle_save_request(None, &graph()), SaveResponse { success: false, path: String::new() });
        let r = handle_load_request(None);
        assert!(!r.success);
        assert!(r.data.is_none());
    }

    #[test]
    fn save_then_load_round_trips_through_envelopes() {
        let dir = tempfile::tempdir().unwrap();
        let saved = handle_save_request(Some(&dir.path().join("g")), &graph());
        assert!(saved.success);
        assert!(saved.path.ends_with("g.json"));

        let loaded = handle_load_request(Some(Path::new(&saved.path)));
        assert!(loaded.success, "{}", loaded.message);
        assert_eq!(loaded.data, Some(graph()));
    }

    #[test]
    fn failed_load_carries_a_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"[]").unwrap();
        let r = handle_load_request(Some(&path));
        assert!(!r.success);
        assert!(r.message.starts_with("Failed to load data"));
        assert!(r.data.is_none());
    }

    #[test]
    fn load_response_omits_absent_data() {
        let r = LoadResponse { success: false, message: "x".into(), data: None };
        let v = serde_json::to_value(&r).unwrap();
        assert!(v.get("data").is_none());
    }
}
