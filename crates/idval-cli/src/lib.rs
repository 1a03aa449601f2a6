//! # idval-cli — Identity Validator Command-Line Interface
//!
//! Thin CLI over `idval-schema`: argument parsing lives in `main`, the
//! batch pipeline in [`run`], and contract output in [`report`].
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the pipeline; handlers delegate
//!   to `idval-schema` for all validation logic.
//! - Report lines (per-file markers, warnings block, final banner) are a
//!   grep surface for downstream scripts; change their shapes deliberately.

pub mod report;
pub mod run;
