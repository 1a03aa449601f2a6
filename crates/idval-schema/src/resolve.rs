//! # Type Resolver
//!
//! Routes a candidate file to a schema category by filename prefix.
//! The rule is case-insensitive on the file name only, never on the
//! directory path.

use crate::registry::Category;

/// Outcome of filename-based type resolution.
///
/// `SchemaFile` and `Unknown` both mean "not validated", but they differ
/// in reporting: schema files are infrastructure and excluded silently,
/// while an unrecognized name earns a warning in the final report. The
/// caller owns emitting that warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The file name matched a category prefix.
    Matched(Category),
    /// The file is a schema file, not identity data.
    SchemaFile,
    /// No naming rule matched; the caller should warn.
    Unknown,
}

/// Resolve a candidate file name to a schema category.
pub fn resolve_schema_type(file_name: &str) -> Resolution {
    let lowered = file_name.to_lowercase();

    if lowered.starts_with("application_") {
        Resolution::Matched(Category::Application)
    } else if lowered.starts_with("human_") {
        Resolution::Matched(Category::Human)
    } else if lowered.starts_with("schema_") {
        tracing::debug!(file_name, "schema file, excluded from validation");
        Resolution::SchemaFile
    } else {
        Resolution::Unknown
    }
}
