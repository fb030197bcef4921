//! Plain-text renderer (always available; used by the CLI by default).

use std::fmt::Write;

use crate::{fmt3, ReportModel};

/// Columns of `#` for a bar at `BAR_MAX_PERCENT`.
const BAR_COLUMNS: f64 = 40.0;

pub fn render_text(model: &ReportModel) -> String {
    let mut out = String::new();

    out.push_str("Criteria\n");
    for row in &model.criteria_ranking {
        let color = model
            .legend
            .iter()
            .find(|l| l.criterion == row.name)
            .map(|l| l.color.as_str())
            .unwrap_or("");
        let _ = writeln!(out, "  {}. {:<20} {}  {}", row.rank, row.name, fmt3(row.weight), color);
    }

    out.push_str("\nFinal scores\n");
    for (pos, bar) in model.bars.iter().enumerate() {
        let columns: f64 = bar.segments.iter().map(|s| s.width_pct).sum::<f64>() / crate::BAR_MAX_PERCENT * BAR_COLUMNS;
        let parts: Vec<String> = bar
            .segments
            .iter()
            .map(|s| format!("{} {}", s.criterion, fmt3(s.score)))
            .collect();
        let _ = writeln!(
            out,
            "  {}. {:<20} {}  {:<40}  {}",
            pos + 1,
            bar.alternative,
            fmt3(bar.total),
            "#".repeat(columns.round() as usize),
            parts.join(" | ")
        );
    }

    for section in &model.alternative_rankings {
        let _ = writeln!(
            out,
            "\n{} (rank {}, weight {})",
            section.criterion,
            section.rank,
            fmt3(section.weight)
        );
        for row in &section.alternatives {
            let _ = writeln!(
                out,
                "  {}. {:<20} weight {}  score {}",
                row.rank,
                row.name,
                fmt3(row.weight),
                fmt3(row.score.unwrap_or(0.0))
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_model;
    use rw_algo::{recompute_criteria, DecisionGraph};

    #[test]
    fn text_lists_totals_in_rank_order() {
        let mut g = DecisionGraph::seed(
            vec!["Cost".parse().unwrap(), "Quality".parse().unwrap()],
            vec!["A".parse().unwrap(), "B".parse().unwrap()],
        )
        .unwrap();
        g.criteria[1].alternatives[0].order = 2;
        g.criteria[1].alternatives[1].order = 1;
        recompute_criteria(&mut g.criteria).unwrap();

        let text = render_text(&build_model(&g));
        let a = text.find("1. A").unwrap();
        let b = text.find("2. B").unwrap();
        assert!(a < b);
        assert!(text.contains("0.556"));
        assert!(text.contains("0.444"));
        assert!(text.contains("Quality (rank 2, weight 0.333)"));
        assert!(text.contains(&"#".repeat(40)));
    }

    #[test]
    fn empty_graph_renders_headers_only() {
        let text = render_text(&build_model(&DecisionGraph::default()));
        assert_eq!(text, "Criteria\n\nFinal scores\n");
    }
}
