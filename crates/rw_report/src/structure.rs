//! Report data model + mapper from a `DecisionGraph`.
//!
//! Sections, in order: legend (criteria colors), bars (final totals split per
//! criterion), rankings (criteria by rank, then each criterion's alternatives).

use rw_algo::aggregate_final_scores;
use rw_core::{determinism::sorted_by_rank, DecisionGraph};

/// Criterion colors, assigned by criterion position and cycled.
pub const PALETTE: [&str; 10] = [
    "#FF6347", "#4682B4", "#32CD32", "#FFD700", "#6A5ACD",
    "#E9967A", "#7B68EE", "#3CB371", "#FFA500", "#DA70D6",
];

/// Width (percent of the chart) of the longest bar.
pub const BAR_MAX_PERCENT: f64 = 80.0;

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ReportModel {
    pub legend: Vec<LegendEntry>,
    pub bars: Vec<Bar>,
    /// Highest final total; bar widths are relative to it.
    pub max_total: f64,
    pub criteria_ranking: Vec<RankRow>,
    pub alternative_rankings: Vec<CriterionRanking>,
}

#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub criterion: String,
    pub color: String,
    pub weight: f64,
}

#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub alternative: String,
    pub total: f64,
    pub segments: Vec<Segment>,
}

#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub criterion: String,
    pub color: String,
    pub score: f64,
    pub width_pct: f64,
}

#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RankRow {
    pub rank: u32,
    pub name: String,
    pub weight: f64,
    /// Alternatives only.
    pub score: Option<f64>,
}

#[cfg_attr(any(feature = "render_json", feature = "render_html"), derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CriterionRanking {
    pub criterion: String,
    pub rank: u32,
    pub weight: f64,
    pub alternatives: Vec<RankRow>,
}

pub fn build_model(graph: &DecisionGraph) -> ReportModel {
    let legend = graph
        .criteria
        .iter()
        .enumerate()
        .map(|(i, c)| LegendEntry {
            criterion: c.name.to_string(),
            color: color_for(i).to_string(),
            weight: c.weight,
        })
        .collect();

    let totals = aggregate_final_scores(&graph.criteria);
    let max_total = totals.max_total();

    let bars = totals
        .iter()
        .map(|t| Bar {
            alternative: t.name.to_string(),
            total: t.total,
            segments: t
                .scores
                .iter()
                .map(|s| {
                    let idx = graph.criteria.iter().position(|c| c.name == s.criterion).unwrap_or(0);
                    Segment {
                        criterion: s.criterion.to_string(),
                        color: color_for(idx).to_string(),
                        score: s.score,
                        width_pct: bar_width(s.score, max_total),
                    }
                })
                .collect(),
        })
        .collect();

    let ranked_criteria = sorted_by_rank(&graph.criteria);
    let criteria_ranking = ranked_criteria
        .iter()
        .map(|c| RankRow { rank: c.order, name: c.name.to_string(), weight: c.weight, score: None })
        .collect();

    let alternative_rankings = ranked_criteria
        .iter()
        .map(|c| CriterionRanking {
            criterion: c.name.to_string(),
            rank: c.order,
            weight: c.weight,
            alternatives: sorted_by_rank(&c.alternatives)
                .into_iter()
                .map(|a| RankRow {
                    rank: a.order,
                    name: a.name.to_string(),
                    weight: a.weight,
                    score: Some(a.score),
                })
                .collect(),
        })
        .collect();

    ReportModel { legend, bars, max_total, criteria_ranking, alternative_rankings }
}

fn bar_width(score: f64, max_total: f64) -> f64 {
    if max_total > 0.0 {
        score / max_total * BAR_MAX_PERCENT
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_algo::{recompute_criteria, ItemName};

    fn names(xs: &[&str]) -> Vec<ItemName> {
        xs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn scenario() -> DecisionGraph {
        let mut g = DecisionGraph::seed(names(&["Cost", "Quality"]), names(&["A", "B"])).unwrap();
        g.criteria[1].alternatives[0].order = 2;
        g.criteria[1].alternatives[1].order = 1;
        recompute_criteria(&mut g.criteria).unwrap();
        g
    }

    #[test]
    fn legend_follows_criterion_positions() {
        let m = build_model(&scenario());
        assert_eq!(m.legend[0].criterion, "Cost");
        assert_eq!(m.legend[0].color, "#FF6347");
        assert_eq!(m.legend[1].color, "#4682B4");
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(color_for(10), PALETTE[0]);
        assert_eq!(color_for(13), PALETTE[3]);
    }

    #[test]
    fn leader_bar_spans_eighty_percent() {
        let m = build_model(&scenario());
        let lead = &m.bars[0];
        assert_eq!(lead.alternative, "A");
        let width: f64 = lead.segments.iter().map(|s| s.width_pct).sum();
        assert!((width - BAR_MAX_PERCENT).abs() < 1e-9);
        // Cost segment: (4/9) / (5/9) * 80
        assert!((lead.segments[0].width_pct - 64.0).abs() < 1e-9);
    }

    #[test]
    fn zero_totals_give_zero_widths() {
        let g = DecisionGraph::seed(names(&["C"]), names(&["A"])).unwrap();
        let m = build_model(&g);
        assert_eq!(m.max_total, 0.0);
        assert_eq!(m.bars[0].segments[0].width_pct, 0.0);
    }

    #[test]
    fn rankings_are_sorted_by_rank() {
        let m = build_model(&scenario());
        let quality = &m.alternative_rankings[1];
        assert_eq!(quality.criterion, "Quality");
        let order: Vec<&str> = quality.alternatives.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
        assert!(m.criteria_ranking.iter().all(|r| r.score.is_none()));
    }
}
