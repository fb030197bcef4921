//! Self-contained HTML renderer (embedded template, inline styles, no assets).

use minijinja::{context, Environment};
use serde::Serialize;

use crate::{fmt3, ReportError, ReportModel};

static TEMPLATE: &str = r#"<!doctype html>
<html lang="en"><meta charset="utf-8">
<title>Decision scores</title>
<style>
  body { font-family: sans-serif; margin: 2em; }
  .bar { display: flex; height: 1.4em; margin: .2em 0; }
  .seg { height: 100%; }
  td, th { padding: .2em .8em; text-align: left; }
</style>
<h1>Decision scores</h1>

<h2>Legend</h2>
<ul>
{% for l in legend %}  <li><span style="color: {{ l.color }}">&#9632;</span> {{ l.criterion }} ({{ l.weight }})</li>
{% endfor %}</ul>

<h2>Final scores</h2>
{% for b in bars %}<div>
  <strong>{{ b.alternative }}</strong> {{ b.total }}
  <div class="bar">{% for s in b.segments %}<div class="seg" title="{{ s.criterion }}: {{ s.score }}" style="width: {{ s.width }}%; background: {{ s.color }}"></div>{% endfor %}</div>
</div>
{% endfor %}
<h2>Rankings</h2>
{% for c in rankings %}<h3>{{ c.rank }}. {{ c.criterion }} ({{ c.weight }})</h3>
<table>
  <tr><th>Rank</th><th>Alternative</th><th>Weight</th><th>Score</th></tr>
{% for r in c.rows %}  <tr><td>{{ r.rank }}</td><td>{{ r.name }}</td><td>{{ r.weight }}</td><td>{{ r.score }}</td></tr>
{% endfor %}</table>
{% endfor %}</html>
"#;

// Template view: numbers pre-formatted so output does not depend on the
// template engine's float formatting.

#[derive(Serialize)]
struct LegendView<'a> {
    criterion: &'a str,
    color: &'a str,
    weight: String,
}

#[derive(Serialize)]
struct SegmentView<'a> {
    criterion: &'a str,
    color: &'a str,
    score: String,
    width: String,
}

#[derive(Serialize)]
struct BarView<'a> {
    alternative: &'a str,
    total: String,
    segments: Vec<SegmentView<'a>>,
}

#[derive(Serialize)]
struct RowView<'a> {
    rank: u32,
    name: &'a str,
    weight: String,
    score: String,
}

#[derive(Serialize)]
struct RankingView<'a> {
    criterion: &'a str,
    rank: u32,
    weight: String,
    rows: Vec<RowView<'a>>,
}

pub fn render_html(model: &ReportModel) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_template("report.html", TEMPLATE)
        .map_err(|_| ReportError::Template("add_template"))?;
    let tmpl = env
        .get_template("report.html")
        .map_err(|_| ReportError::Template("get_template"))?;

    let legend: Vec<LegendView> = model
        .legend
        .iter()
        .map(|l| LegendView { criterion: &l.criterion, color: &l.color, weight: fmt3(l.weight) })
        .collect();

    let bars: Vec<BarView> = model
        .bars
        .iter()
        .map(|b| BarView {
            alternative: &b.alternative,
            total: fmt3(b.total),
            segments: b
                .segments
                .iter()
                .map(|s| SegmentView {
                    criterion: &s.criterion,
                    color: &s.color,
                    score: fmt3(s.score),
                    width: format!("{:.1}", s.width_pct),
                })
                .collect(),
        })
        .collect();

    let rankings: Vec<RankingView> = model
        .alternative_rankings
        .iter()
        .map(|c| RankingView {
            criterion: &c.criterion,
            rank: c.rank,
            weight: fmt3(c.weight),
            rows: c
                .alternatives
                .iter()
                .map(|r| RowView {
                    rank: r.rank,
                    name: &r.name,
                    weight: fmt3(r.weight),
                    score: fmt3(r.score.unwrap_or(0.0)),
                })
                .collect(),
        })
        .collect();

    tmpl.render(context! { legend => legend, bars => bars, rankings => rankings })
        .map_err(|_| ReportError::Template("render_html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_model;
    use rw_algo::{recompute_criteria, DecisionGraph};

    fn graph(criterion: &str) -> DecisionGraph {
        let mut g = DecisionGraph::seed(
            vec![criterion.parse().unwrap()],
            vec!["A".parse().unwrap(), "B".parse().unwrap()],
        )
        .unwrap();
        recompute_criteria(&mut g.criteria).unwrap();
        g
    }

    #[test]
    fn html_has_bar_segments_with_palette_colors() {
        let html = render_html(&build_model(&graph("Cost"))).unwrap();
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("width: 80.0%; background: #FF6347"));
        assert!(html.contains("width: 40.0%"));
        assert!(html.contains("<td>0.667</td>"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render_html(&build_model(&graph("<b>Cost</b>"))).unwrap();
        assert!(!html.contains("<b>Cost</b>"));
        assert!(html.contains("&lt;b&gt;Cost"));
    }
}
