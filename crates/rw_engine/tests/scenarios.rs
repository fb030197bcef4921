//! End-to-end engine scenarios: input → reorder → aggregate → save/load.

use rw_engine::{EngineError, RankingEngine};
use rw_io::IoError;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Cost over Quality; A wins on cost, B on quality.
fn cost_quality() -> RankingEngine {
    let mut e = RankingEngine::from_input("Cost\nQuality", "A\nB").unwrap();
    e.reorder_alternatives("Quality", &["B", "A"]).unwrap();
    e
}

#[test]
fn cost_quality_totals_rank_a_first() {
    let scores = cost_quality().final_scores();
    let names: Vec<&str> = scores.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let a = scores.get("A").unwrap();
    assert!(close(a.total, 5.0 / 9.0));
    assert!(close(a.score_for("Cost").unwrap(), 4.0 / 9.0));
    assert!(close(a.score_for("Quality").unwrap(), 1.0 / 9.0));
    assert!(close(scores.get("B").unwrap().total, 4.0 / 9.0));
    assert_eq!(format!("{:.3}", a.total), "0.556");
}

#[test]
fn three_criteria_weights() {
    let e = RankingEngine::from_input("X\nY\nZ", "A").unwrap();
    let w: Vec<f64> = e.criteria().iter().map(|c| c.weight).collect();
    assert!(close(w[0], 0.5));
    assert!(close(w[1], 1.0 / 3.0));
    assert!(close(w[2], 1.0 / 6.0));
}

#[test]
fn reordering_one_criterion_leaves_the_rest_alone() {
    let mut e = RankingEngine::from_input("Cost\nQuality\nSpeed", "A\nB\nC").unwrap();
    let before = e.graph().clone();

    e.reorder_alternatives("Quality", &["C", "A", "B"]).unwrap();

    for (old, new) in before.criteria.iter().zip(&e.graph().criteria) {
        assert_eq!(old.weight, new.weight);
        if new.name != "Quality" {
            assert_eq!(old, new);
        }
    }
    let q = e.criterion("Quality").unwrap();
    assert!(close(q.alternative("C").unwrap().weight, 0.5));
    assert!(close(q.alternative("C").unwrap().score, 0.5 * q.weight));
}

#[test]
fn reordering_criteria_recomputes_every_score() {
    let mut e = cost_quality();
    e.reorder_criteria(&["Quality", "Cost"]).unwrap();

    for c in e.criteria() {
        for a in &c.alternatives {
            assert!(close(a.score, a.weight * c.weight));
        }
    }
    // quality now dominates, so B overtakes A
    let scores = e.final_scores();
    assert!(close(scores.get("A").unwrap().total, 4.0 / 9.0));
    assert!(close(scores.get("B").unwrap().total, 5.0 / 9.0));
    assert_eq!(scores.entries()[0].name.as_str(), "B");
}

#[test]
fn failed_reorder_leaves_graph_identical() {
    let mut e = cost_quality();
    let before = e.clone();

    let err = e.reorder_criteria(&["Cost", "Cost"]).unwrap_err();
    assert!(matches!(err, EngineError::NotAPermutation { .. }));
    assert!(e.reorder_alternatives("Cost", &["A"]).is_err());
    assert!(e.reorder_alternatives("Cost", &["A", "Z"]).is_err());
    assert_eq!(e, before);
}

#[test]
fn corrupt_rank_sets_are_invalid() {
    let mut g = cost_quality().into_graph();
    g.criteria[0].alternatives[1].order = 3;
    match RankingEngine::from_graph(g) {
        Err(EngineError::Io(IoError::LoadParse { pointer, .. })) => {
            assert_eq!(pointer, "/criteria/0/alternatives")
        }
        other => panic!("expected LoadParse, got {other:?}"),
    }
}

#[test]
fn restore_keeps_graph_when_a_criterion_lacks_an_alternative() {
    let mut e = cost_quality();
    let before = e.clone();
    let mut g = e.graph().clone();
    g.criteria[1].alternatives.retain(|a| a.name.as_str() != "A");
    g.criteria[1].alternatives[0].order = 1;
    assert!(matches!(e.restore(g), Err(EngineError::Io(IoError::LoadParse { .. }))));
    assert_eq!(e, before);
}

#[test]
fn save_load_round_trip_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let mut e = RankingEngine::from_input("Cost\nQuality\nSpeed", "A\nB\nC\nD").unwrap();
    e.move_alternative("Speed", "D", 1).unwrap();

    let saved = e.save(&dir.path().join("decision")).unwrap();
    assert_eq!(saved.path.extension().and_then(|s| s.to_str()), Some("json"));

    let mut other = RankingEngine::new();
    let digest = other.load(&saved.path).unwrap();
    assert_eq!(digest, saved.sha256);
    assert_eq!(other.graph(), e.graph());
}

#[test]
fn failed_load_keeps_current_graph() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"criteria":[{"name":"C","order":1,"weight":null,"alternatives":[]}],"alternatives":[]}"#)
        .unwrap();

    let mut e = cost_quality();
    let before = e.clone();
    match e.load(&bad) {
        Err(EngineError::Io(IoError::LoadParse { pointer, .. })) => {
            assert_eq!(pointer, "/criteria/0/weight");
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(
        e.load(&dir.path().join("missing.json")),
        Err(EngineError::Io(IoError::LoadIo(_)))
    ));
    assert_eq!(e, before);
}

#[test]
fn load_request_replaces_graph_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let src = cost_quality();
    let resp = src.handle_save_request(Some(&dir.path().join("g.json")));
    assert!(resp.success);

    let mut e = RankingEngine::new();
    let loaded = e.handle_load_request(Some(std::path::Path::new(&resp.path)));
    assert!(loaded.success);
    assert_eq!(loaded.message, "Data loaded successfully");
    assert_eq!(e.graph(), src.graph());
}
