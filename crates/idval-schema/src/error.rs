//! # Error Types
//!
//! Structured errors for the validation pipeline, split by recovery
//! policy: [`RegistryError`] is fatal and aborts the whole run before any
//! data file is examined; [`DocumentError`] and [`EngineError`] are
//! recovered as per-file `Invalid` results and never stop the batch.
//!
//! All variants use `thiserror` for derive-based `Display`. The `Display`
//! strings surface verbatim in the CLI report.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::Category;

/// Failure to turn a single YAML file into a semantic document.
///
/// The three variants are deliberately distinct: a missing file, malformed
/// YAML, and YAML that parses but has no JSON representation are different
/// faults with different fixes.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read at all.
    #[error("cannot read file: {0}")]
    Read(#[source] std::io::Error),

    /// The file content is not well-formed YAML.
    #[error("YAML parsing error: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// The YAML parsed but uses constructs outside the JSON-compatible
    /// subset (e.g. a non-finite float or a mapping-valued key).
    #[error("YAML-to-JSON conversion failed: {0}")]
    Convert(String),
}

/// Failure to load the schema set. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The expected schema file does not exist.
    #[error("Schema file not found: {}", path.display())]
    SchemaFileNotFound {
        /// Expected path of the missing schema file.
        path: PathBuf,
    },

    /// The schema file exists but could not be loaded as a document.
    #[error("Error parsing schema {}: {source}", path.display())]
    SchemaParse {
        /// Path of the malformed schema file.
        path: PathBuf,
        /// Underlying document loader failure.
        #[source]
        source: DocumentError,
    },

    /// The schema file loaded but is not itself a valid schema document.
    /// Only produced when the strict engine is compiled in; without it
    /// there is nothing to check the schema against.
    #[error("Invalid schema document {}: {reason}", path.display())]
    InvalidSchemaDocument {
        /// Path of the rejected schema file.
        path: PathBuf,
        /// Engine-reported reason the schema was rejected.
        reason: String,
    },
}

/// Internal-consistency fault in the validation engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A resolved category has no schema in the registry. The registry is
    /// loaded with every category before validation starts, so hitting
    /// this means a bug, not bad input.
    #[error("No schema available for type: {0}")]
    SchemaNotLoaded(Category),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn schema_file_not_found_names_the_path() {
        let err = RegistryError::SchemaFileNotFound {
            path: Path::new("schema_human.yaml").to_path_buf(),
        };
        assert_eq!(err.to_string(), "Schema file not found: schema_human.yaml");
    }

    #[test]
    fn schema_not_loaded_names_the_category() {
        let err = EngineError::SchemaNotLoaded(Category::Human);
        assert_eq!(err.to_string(), "No schema available for type: human");
    }
}
