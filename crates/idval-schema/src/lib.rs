//! # idval-schema — Identity Schema Validation
//!
//! Validation engine for identity description files: YAML documents
//! describing application and human identities, checked against the
//! Draft-07 JSON Schemas that ship alongside them.
//!
//! ## Pipeline
//!
//! - [`document`] loads a YAML file into a semantic `serde_json::Value` tree.
//! - [`registry`] eagerly loads the two fixed schemas (`schema_application.yaml`,
//!   `schema_human.yaml`) at startup and rejects malformed ones before any
//!   data file is examined.
//! - [`resolve`] routes candidate files to a schema category by filename
//!   prefix (`application_`, `human_`).
//! - [`engine`] validates a document against its category's schema, in one
//!   of two tiers selected once at startup: strict JSON Schema validation
//!   when the engine is compiled in (`strict-engine` feature, default), or
//!   a structural four-section presence check otherwise.
//!
//! ## Crate Policy
//!
//! - Exactly two schema categories exist; adding one is a code change.
//! - The registry is immutable after load and reused for every file.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Error messages produced here appear verbatim in the CLI report;
//!   change them deliberately.

pub mod document;
pub mod engine;
pub mod error;
pub mod registry;
pub mod resolve;

pub use document::load_document;
#[cfg(feature = "strict-engine")]
pub use engine::StrictValidator;
pub use engine::{
    select_validator, validate_against, StructuralValidator, ValidationMode, Validator,
    REQUIRED_SECTIONS,
};
pub use error::{DocumentError, EngineError, RegistryError};
pub use registry::{Category, SchemaRegistry};
pub use resolve::{resolve_schema_type, Resolution};
