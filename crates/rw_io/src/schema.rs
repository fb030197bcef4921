//! JSON Schema (draft 7) for persisted graph files.
//!
//! The schema pins the wire shape only: required fields, types and `order ≥ 1`.
//! Rules that span several items (dense ranks, matching name sets) live in
//! `graph_file::check_structure`. Extra properties are tolerated so files from
//! newer writers still load.

use serde_json::{json, Value};

use crate::{IoError, IoResult};

pub fn graph_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "DecisionGraph",
        "type": "object",
        "required": ["criteria", "alternatives"],
        "properties": {
            "criteria": { "type": "array", "items": { "$ref": "#/definitions/criterion" } },
            "alternatives": { "type": "array", "items": { "$ref": "#/definitions/alternative" } }
        },
        "definitions": {
            "name": { "type": "string", "minLength": 1 },
            "order": { "type": "integer", "minimum": 1 },
            "alternative": {
                "type": "object",
                "required": ["name", "order", "weight", "score"],
                "properties": {
                    "name": { "$ref": "#/definitions/name" },
                    "order": { "$ref": "#/definitions/order" },
                    "weight": { "type": "number" },
                    "score": { "type": "number" }
                }
            },
            "criterion": {
                "type": "object",
                "required": ["name", "order", "weight", "alternatives"],
                "properties": {
                    "name": { "$ref": "#/definitions/name" },
                    "order": { "$ref": "#/definitions/order" },
                    "weight": { "type": "number" },
                    "alternatives": { "type": "array", "items": { "$ref": "#/definitions/alternative" } }
                }
            }
        }
    })
}

/// Validate `instance` against the graph schema. The first violation is
/// reported with its instance pointer.
pub fn validate_graph_value(instance: &Value) -> IoResult<()> {
    let schema = graph_schema();
    let compiled = jsonschema::JSONSchema::compile(&schema)
        .map_err(|e| IoError::parse("/", format!("schema compile: {e}")))?;

    let first = match compiled.validate(instance) {
        Ok(()) => return Ok(()),
        Err(mut errors) => errors
            .next()
            .map(|e| (e.instance_path.to_string(), e.to_string())),
    };
    let (pointer, msg) = first.unwrap_or_else(|| ("/".to_string(), "schema violation".to_string()));
    let pointer = if pointer.is_empty() { "/".to_string() } else { pointer };
    Err(IoError::LoadParse { pointer, msg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_graph() {
        assert!(validate_graph_value(&json!({"criteria": [], "alternatives": []})).is_ok());
    }

    #[test]
    fn null_weight_is_rejected_with_pointer() {
        let v = json!({
            "criteria": [{ "name": "Cost", "order": 1, "weight": null, "alternatives": [] }],
            "alternatives": []
        });
        match validate_graph_value(&v) {
            Err(IoError::LoadParse { pointer, .. }) => assert_eq!(pointer, "/criteria/0/weight"),
            other => panic!("expected LoadParse, got {other:?}"),
        }
    }

    #[test]
    fn missing_top_level_field_is_rejected() {
        assert!(validate_graph_value(&json!({"criteria": []})).is_err());
    }

    #[test]
    fn zero_rank_is_rejected() {
        let v = json!({
            "criteria": [],
            "alternatives": [{ "name": "A", "order": 0, "weight": 0, "score": 0 }]
        });
        match validate_graph_value(&v) {
            Err(IoError::LoadParse { pointer, .. }) => assert_eq!(pointer, "/alternatives/0/order"),
            other => panic!("expected LoadParse, got {other:?}"),
        }
    }
}
