//! JSON renderer: the model serialized as-is (field order = struct layout).

use crate::{ReportError, ReportModel};

pub fn render_json(model: &ReportModel) -> Result<String, ReportError> {
    serde_json::to_string_pretty(model).map_err(|_| ReportError::Serialize("json"))
}
