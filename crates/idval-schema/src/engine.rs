//! # Validation Engine
//!
//! Two-tier validation of identity documents:
//!
//! - **Strict**: full Draft-07 JSON Schema validation via the `jsonschema`
//!   crate. Reports the first violation only, with the field path from the
//!   document root. Available when the `strict-engine` feature is compiled
//!   in (the default).
//! - **Structural**: a degraded fallback that checks only for the presence
//!   of the four fixed top-level sections, ignoring what the loaded schema
//!   actually specifies. This precision gap versus strict mode is a known,
//!   deliberate property of the fallback.
//!
//! The tier is selected once at startup via [`select_validator`], not
//! re-probed per file.

use serde_json::Value;

use crate::error::EngineError;
use crate::registry::{Category, SchemaRegistry};

/// Top-level sections every identity file must carry. The structural tier
/// tests only for their presence.
pub const REQUIRED_SECTIONS: [&str; 4] = ["metadata", "identity", "authentication", "policies"];

/// Which validation tier is active for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Full JSON Schema validation.
    Strict,
    /// Four-section presence check.
    Structural,
}

/// A validation tier. Returns human-readable error messages for one
/// document against one schema; an empty list means the document passed.
pub trait Validator {
    /// The tier this validator implements.
    fn mode(&self) -> ValidationMode;

    /// Validate `document` against `schema`.
    fn validate(&self, document: &Value, schema: &Value) -> Vec<String>;
}

/// Select the validation tier for this process: strict when the schema
/// engine is compiled in, structural otherwise.
pub fn select_validator() -> Box<dyn Validator> {
    #[cfg(feature = "strict-engine")]
    {
        Box::new(StrictValidator)
    }
    #[cfg(not(feature = "strict-engine"))]
    {
        Box::new(StructuralValidator)
    }
}

/// Validate a loaded document against the schema for `category`.
///
/// # Errors
///
/// [`EngineError::SchemaNotLoaded`] if `category` is absent from the
/// registry. The registry is loaded with every category before validation
/// starts, so this indicates an internal-consistency fault, not bad input.
pub fn validate_against(
    registry: &SchemaRegistry,
    category: Category,
    document: &Value,
    validator: &dyn Validator,
) -> Result<Vec<String>, EngineError> {
    let schema = registry
        .get(category)
        .ok_or(EngineError::SchemaNotLoaded(category))?;
    Ok(validator.validate(document, schema))
}

/// Strict tier: Draft-07 JSON Schema validation.
///
/// Reports only the first violation the engine encounters. Aggregating all
/// violations per file is out of scope; the single-error report is the
/// contract.
#[cfg(feature = "strict-engine")]
#[derive(Debug, Clone, Copy)]
pub struct StrictValidator;

#[cfg(feature = "strict-engine")]
impl Validator for StrictValidator {
    fn mode(&self) -> ValidationMode {
        ValidationMode::Strict
    }

    fn validate(&self, document: &Value, schema: &Value) -> Vec<String> {
        let mut options = jsonschema::options();
        options.with_draft(jsonschema::Draft::Draft7);
        let compiled = match options.build(schema) {
            Ok(v) => v,
            // Unreachable after a registry load, which compiles every
            // schema eagerly. Still reported rather than panicking.
            Err(e) => return vec![format!("Schema compilation failed: {e}")],
        };

        match compiled.validate(document) {
            Ok(()) => Vec::new(),
            Err(violation) => {
                let location = instance_location(&violation.instance_path.to_string());
                vec![format!("Validation error at '{location}': {violation}")]
            }
        }
    }
}

/// Render a JSON Pointer instance path as the arrow-joined key sequence
/// used in error messages, or `root` for the document root.
#[cfg(feature = "strict-engine")]
fn instance_location(pointer: &str) -> String {
    if pointer.is_empty() {
        return "root".to_string();
    }
    pointer
        .trim_start_matches('/')
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Structural tier: presence check for the four fixed top-level sections.
///
/// Takes the schema argument for interface symmetry but deliberately does
/// not consult it.
#[derive(Debug, Clone, Copy)]
pub struct StructuralValidator;

impl Validator for StructuralValidator {
    fn mode(&self) -> ValidationMode {
        ValidationMode::Structural
    }

    fn validate(&self, document: &Value, _schema: &Value) -> Vec<String> {
        REQUIRED_SECTIONS
            .iter()
            .filter(|section| document.get(**section).is_none())
            .map(|section| format!("Missing required section: {section}"))
            .collect()
    }
}
