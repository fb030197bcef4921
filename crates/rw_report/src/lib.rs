//! rw_report — pure offline report model + renderers (text/JSON/HTML).
//!
//! - No I/O and no recomputation: the model reads weights and scores as
//!   stored in the graph and totals from `rw_algo::aggregate_final_scores`.
//! - Stable section order and field names.
//! - Numbers are kept as `f64` in the model; renderers format them.

#![deny(unsafe_code)]

use std::fmt;

pub mod structure;
pub mod render_text;
#[cfg(feature = "render_json")]
pub mod render_json;
#[cfg(feature = "render_html")]
pub mod render_html;

pub use structure::{
    build_model, color_for, Bar, CriterionRanking, LegendEntry, RankRow, ReportModel, Segment,
    BAR_MAX_PERCENT, PALETTE,
};
pub use render_text::render_text;
#[cfg(feature = "render_json")]
pub use render_json::render_json;
#[cfg(feature = "render_html")]
pub use render_html::render_html;

#[derive(Debug)]
pub enum ReportError {
    Template(&'static str),
    Serialize(&'static str),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Template(stage) => write!(f, "template error: {stage}"),
            ReportError::Serialize(stage) => write!(f, "serialize error: {stage}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Three-decimal display used by every renderer.
pub(crate) fn fmt3(x: f64) -> String {
    format!("{x:.3}")
}
