//! # Schema Registry
//!
//! Eagerly loads the fixed set of identity schemas at startup and exposes
//! category-to-schema lookup for the rest of the run.
//!
//! Loading is all-or-nothing: a missing, malformed, or (in strict builds)
//! structurally invalid schema aborts before any data file is examined.
//! After a successful load the registry is immutable and reused for every
//! per-file validation.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::document;
use crate::error::RegistryError;

/// Identity schema category.
///
/// Exactly two validation profiles exist. Adding one is a code change:
/// every exhaustive `match` over `Category` must then handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Application (service/workload) identity.
    Application,
    /// Human (person) identity.
    Human,
}

impl Category {
    /// All categories, in schema-load order.
    pub const ALL: [Category; 2] = [Category::Application, Category::Human];

    /// Lowercase category name as used in file naming conventions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Application => "application",
            Category::Human => "human",
        }
    }

    /// Expected schema file name for this category.
    pub fn schema_file_name(&self) -> String {
        format!("schema_{}.yaml", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The loaded schema set, one schema document per category.
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: HashMap<Category, Value>,
}

impl SchemaRegistry {
    /// Load every category's schema from `dir`.
    ///
    /// For each category the expected file is `schema_<category>.yaml`.
    /// Prints one confirmation line per loaded schema; the report greps
    /// these markers.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::SchemaFileNotFound`] if an expected file is absent.
    /// - [`RegistryError::SchemaParse`] if a schema file is not loadable YAML.
    /// - [`RegistryError::InvalidSchemaDocument`] if the engine rejects the
    ///   schema itself (strict builds only; without the engine the check
    ///   is skipped).
    pub fn load(dir: &Path) -> Result<Self, RegistryError> {
        let mut schemas = HashMap::new();

        for category in Category::ALL {
            let path = dir.join(category.schema_file_name());
            if !path.exists() {
                return Err(RegistryError::SchemaFileNotFound { path });
            }

            let schema = document::load_document(&path).map_err(|source| {
                RegistryError::SchemaParse {
                    path: path.clone(),
                    source,
                }
            })?;

            check_schema_document(&schema, &path)?;

            println!("✓ Loaded {category} schema: {}", path.display());
            schemas.insert(category, schema);
        }

        Ok(Self { schemas })
    }

    /// Look up the schema document for a category.
    pub fn get(&self, category: Category) -> Option<&Value> {
        self.schemas.get(&category)
    }

    /// Number of loaded schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }
}

/// Reject schemas the engine cannot compile, eagerly at load time rather
/// than on first use against a data file.
#[cfg(feature = "strict-engine")]
fn check_schema_document(schema: &Value, path: &Path) -> Result<(), RegistryError> {
    let mut options = jsonschema::options();
    options.with_draft(jsonschema::Draft::Draft7);
    match options.build(schema) {
        Ok(_) => Ok(()),
        Err(e) => Err(RegistryError::InvalidSchemaDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Without the engine there is nothing to check the schema against; the
/// fallback tier never consults schema content either. Skipped, not failed.
#[cfg(not(feature = "strict-engine"))]
fn check_schema_document(_schema: &Value, path: &Path) -> Result<(), RegistryError> {
    tracing::debug!(
        path = %path.display(),
        "schema engine not compiled in, skipping schema self-check"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const APPLICATION_SCHEMA: &str = r#"
$schema: "http://json-schema.org/draft-07/schema#"
type: object
required: [metadata, identity, authentication, policies]
"#;

    const HUMAN_SCHEMA: &str = r#"
$schema: "http://json-schema.org/draft-07/schema#"
type: object
required: [metadata, identity, authentication, policies]
"#;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    fn write_both_schemas(dir: &Path) {
        write_file(dir, "schema_application.yaml", APPLICATION_SCHEMA);
        write_file(dir, "schema_human.yaml", HUMAN_SCHEMA);
    }

    #[test]
    fn loads_both_categories() {
        let dir = tempfile::tempdir().unwrap();
        write_both_schemas(dir.path());

        let registry = SchemaRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.schema_count(), 2);
        assert!(registry.get(Category::Application).is_some());
        assert!(registry.get(Category::Human).is_some());
    }

    #[test]
    fn missing_human_schema_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "schema_application.yaml", APPLICATION_SCHEMA);

        let err = SchemaRegistry::load(dir.path()).unwrap_err();
        assert!(matches!(err, RegistryError::SchemaFileNotFound { .. }));
        assert!(err.to_string().contains("schema_human.yaml"));
    }

    #[test]
    fn malformed_schema_yaml_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "schema_application.yaml", "type: [unclosed\n");
        write_file(dir.path(), "schema_human.yaml", HUMAN_SCHEMA);

        let err = SchemaRegistry::load(dir.path()).unwrap_err();
        assert!(matches!(err, RegistryError::SchemaParse { .. }));
        assert!(err.to_string().contains("schema_application.yaml"));
    }

    #[cfg(feature = "strict-engine")]
    #[test]
    fn structurally_invalid_schema_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        // "type" must be a string or array of strings, not a number.
        write_file(dir.path(), "schema_application.yaml", "type: 12\n");
        write_file(dir.path(), "schema_human.yaml", HUMAN_SCHEMA);

        let err = SchemaRegistry::load(dir.path()).unwrap_err();
        assert!(
            matches!(err, RegistryError::InvalidSchemaDocument { .. }),
            "expected InvalidSchemaDocument, got: {err}"
        );
    }

    #[test]
    fn schema_file_names_follow_the_convention() {
        assert_eq!(
            Category::Application.schema_file_name(),
            "schema_application.yaml"
        );
        assert_eq!(Category::Human.schema_file_name(), "schema_human.yaml");
    }
}
