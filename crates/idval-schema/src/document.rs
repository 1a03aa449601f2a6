//! # Document Loader
//!
//! Converts a YAML identity file into an in-memory semantic document
//! (a `serde_json::Value` tree) ready for schema validation.
//!
//! YAML has a richer type system than JSON (tags, anchors, non-string map
//! keys). Identity files use only the JSON-compatible subset; anything
//! outside it is reported as a conversion failure, distinct from read and
//! parse failures.

use std::path::Path;

use serde_json::Value;

use crate::error::DocumentError;

/// Load a YAML file and convert it to a semantic JSON document.
///
/// # Errors
///
/// - [`DocumentError::Read`] if the file cannot be read (missing, permissions).
/// - [`DocumentError::Parse`] if the content is not well-formed YAML.
/// - [`DocumentError::Convert`] if the YAML has no JSON representation.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(DocumentError::Read)?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content).map_err(DocumentError::Parse)?;
    yaml_to_json(&yaml)
}

/// Convert a `serde_yaml::Value` tree to the equivalent `serde_json::Value`.
///
/// Scalar map keys (numbers, booleans) are stringified; YAML tags are
/// stripped and the inner value converted.
pub fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, DocumentError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| {
                        DocumentError::Convert(format!("cannot represent float {f} in JSON"))
                    })
            } else {
                Err(DocumentError::Convert(format!(
                    "unsupported YAML number: {n:?}"
                )))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, DocumentError> =
                seq.iter().map(yaml_to_json).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(DocumentError::Convert(format!(
                            "unsupported YAML map key type: {other:?}"
                        )))
                    }
                };
                json_map.insert(key, yaml_to_json(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}
