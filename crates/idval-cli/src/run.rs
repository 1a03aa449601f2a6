//! # Batch Runner
//!
//! Linear pipeline over one directory: preflight, schema load, candidate
//! discovery, per-file validation, summary. Preflight and load failures
//! abort the whole run; per-file failures are recorded and the batch
//! continues.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use idval_schema::{
    engine, load_document, resolve_schema_type, Resolution, SchemaRegistry, Validator,
};

use crate::report;

/// Overall outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every processed file was valid (zero candidates counts as success).
    Success,
    /// At least one file was invalid, or a fatal precondition failed.
    Failure,
}

/// Per-file verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    /// The file could not be routed to a schema category.
    Skipped,
}

/// One result per candidate file, skipped files included.
#[derive(Debug)]
pub struct FileResult {
    pub file_name: String,
    pub verdict: Verdict,
    pub errors: Vec<String>,
}

/// Warnings accumulated over one run, printed before the final banner.
#[derive(Debug, Default)]
pub struct RunContext {
    pub warnings: Vec<String>,
}

/// Run the full validation pipeline over `dir`.
///
/// All contract output is printed here and in [`report`]; the caller only
/// maps the returned status to an exit code.
pub fn run(dir: &Path) -> RunStatus {
    report::print_tool_header();

    // Tier selection happens once; per-file validation never re-probes.
    let validator = engine::select_validator();
    report::print_mode(validator.mode());

    let registry = match SchemaRegistry::load(dir) {
        Ok(registry) => registry,
        Err(e) => {
            report::print_fatal("Failed to load schemas", &e.to_string());
            return RunStatus::Failure;
        }
    };
    tracing::debug!(schemas = registry.schema_count(), "schema registry loaded");

    let candidates = match discover_candidates(dir) {
        Ok(candidates) => candidates,
        Err(e) => {
            report::print_fatal("Validation aborted", &format!("{e:#}"));
            return RunStatus::Failure;
        }
    };
    tracing::debug!(count = candidates.len(), "discovered candidate files");

    let mut ctx = RunContext::default();
    let mut all_valid = true;

    if candidates.is_empty() {
        ctx.warnings
            .push("No identity YAML files found to validate".to_string());
    } else {
        report::print_batch_header(candidates.len());
        for path in &candidates {
            let result = validate_one(path, &registry, validator.as_ref(), &mut ctx);
            report::print_file_result(&result);
            if result.verdict == Verdict::Invalid {
                all_valid = false;
            }
        }
    }

    report::print_warnings(&ctx.warnings);
    report::print_summary(all_valid);

    if all_valid {
        RunStatus::Success
    } else {
        RunStatus::Failure
    }
}

/// Enumerate candidate files: `.yaml`/`.yml` directly under `dir`
/// (non-recursive), schema files excluded, sorted by path so reports are
/// deterministic regardless of readdir order.
fn discover_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Identities directory not found: {}", dir.display());
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read directory {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("cannot read directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        );
        if !is_yaml || name.starts_with("schema_") {
            continue;
        }
        candidates.push(path);
    }

    candidates.sort();
    Ok(candidates)
}

/// Validate a single candidate file, producing exactly one result.
///
/// Unroutable files are skipped with a warning; a skipped schema file
/// stays silent. A document that fails to load short-circuits to an
/// `Invalid` result without consulting the engine.
fn validate_one(
    path: &Path,
    registry: &SchemaRegistry,
    validator: &dyn Validator,
    ctx: &mut RunContext,
) -> FileResult {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let category = match resolve_schema_type(&file_name) {
        Resolution::Matched(category) => category,
        Resolution::SchemaFile => {
            return FileResult {
                file_name,
                verdict: Verdict::Skipped,
                errors: Vec::new(),
            }
        }
        Resolution::Unknown => {
            ctx.warnings
                .push(format!("Cannot determine schema type for file: {file_name}"));
            return FileResult {
                file_name,
                verdict: Verdict::Skipped,
                errors: Vec::new(),
            };
        }
    };

    let document = match load_document(path) {
        Ok(document) => document,
        Err(e) => {
            return FileResult {
                file_name,
                verdict: Verdict::Invalid,
                errors: vec![e.to_string()],
            }
        }
    };

    match engine::validate_against(registry, category, &document, validator) {
        Ok(errors) if errors.is_empty() => FileResult {
            file_name,
            verdict: Verdict::Valid,
            errors,
        },
        Ok(errors) => FileResult {
            file_name,
            verdict: Verdict::Invalid,
            errors,
        },
        Err(e) => FileResult {
            file_name,
            verdict: Verdict::Invalid,
            errors: vec![e.to_string()],
        },
    }
}
