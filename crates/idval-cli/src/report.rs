//! # Reporter
//!
//! Line-oriented report output on stdout. Three message classes make up
//! the contract surface: per-file pass/fail markers with nested errors,
//! the aggregated warnings block, and the final banner. Downstream
//! scripts grep these markers.

use idval_schema::ValidationMode;

use crate::run::{FileResult, Verdict};

/// Tool banner, printed before anything else.
pub fn print_tool_header() {
    println!("Identity YAML Validation Tool");
    println!("{}", "=".repeat(40));
}

/// Announce which validation tier this run uses.
pub fn print_mode(mode: ValidationMode) {
    match mode {
        ValidationMode::Strict => {
            println!("✓ Full validation mode (json-schema engine)");
        }
        ValidationMode::Structural => {
            println!("⚠️  Fallback validation mode (structural checks only)");
            println!("   For full validation, rebuild with the strict-engine feature");
        }
    }
}

/// Header for the per-file section.
pub fn print_batch_header(count: usize) {
    println!("\nValidating {count} identity files...");
    println!("{}", "=".repeat(60));
}

/// One line per file; failing files get each error indented beneath.
/// Skipped files print the pass marker: they are processed, not failed.
pub fn print_file_result(result: &FileResult) {
    match result.verdict {
        Verdict::Valid | Verdict::Skipped => println!("✓ {}", result.file_name),
        Verdict::Invalid => {
            println!("✗ {}", result.file_name);
            for error in &result.errors {
                println!("    {error}");
            }
        }
    }
}

/// Aggregated warnings block, omitted entirely when there are none.
pub fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("\n⚠️  Warnings:");
    for warning in warnings {
        println!("  {warning}");
    }
}

/// Final banner and, on failure, the fix-and-rerun hint.
pub fn print_summary(all_valid: bool) {
    println!("\n{}", "=".repeat(60));
    if all_valid {
        println!("🎉 All identity files are valid!");
    } else {
        println!("❌ Some identity files have validation errors.");
        println!("Please fix the errors above and run validation again.");
    }
}

/// Whole-run fatal cause, printed before exiting with a failure code.
pub fn print_fatal(heading: &str, cause: &str) {
    println!("\n❌ {heading}:");
    println!("  {cause}");
}
