//! Integration test: spawn the `idval` binary against directory fixtures
//! and check the printed report contract end to end. The per-file markers,
//! warnings block, and final banners are grepped by downstream scripts, so
//! their exact shapes are asserted here, along with report determinism.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

const SCHEMA: &str = r#"
$schema: "http://json-schema.org/draft-07/schema#"
type: object
required: [metadata, identity, authentication, policies]
"#;

const VALID_IDENTITY: &str = r#"
metadata:
  name: test
identity:
  type: human
authentication:
  method: password
policies: {}
"#;

const MISSING_AUTHENTICATION: &str = r#"
metadata:
  name: test
identity:
  type: application
policies: {}
"#;

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut f = std::fs::File::create(dir.join(name)).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}

fn write_schemas(dir: &Path) {
    write_file(dir, "schema_application.yaml", SCHEMA);
    write_file(dir, "schema_human.yaml", SCHEMA);
}

fn run_idval(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_idval"))
        .arg("--dir")
        .arg(dir)
        .output()
        .expect("failed to spawn idval")
}

#[test]
fn report_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    write_schemas(dir.path());
    write_file(dir.path(), "human_bob.yaml", VALID_IDENTITY);
    write_file(dir.path(), "application_alice.yaml", MISSING_AUTHENTICATION);
    write_file(dir.path(), "notes.yaml", "anything: here\n");

    let first = run_idval(dir.path());
    let second = run_idval(dir.path());

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(second.status.code(), Some(1));
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn all_valid_run_prints_markers_and_success_banner() {
    let dir = tempfile::tempdir().unwrap();
    write_schemas(dir.path());
    write_file(dir.path(), "human_bob.yaml", VALID_IDENTITY);

    let output = run_idval(dir.path());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Identity YAML Validation Tool"));
    assert!(stdout.contains("✓ Loaded application schema:"));
    assert!(stdout.contains("✓ Loaded human schema:"));
    assert!(stdout.contains("Validating 1 identity files..."));
    assert!(stdout.contains("✓ human_bob.yaml"));
    assert!(stdout.contains("🎉 All identity files are valid!"));
    assert!(!stdout.contains("✗ "));
    assert!(!stdout.contains("⚠️  Warnings:"));
}

#[test]
fn invalid_file_prints_fail_marker_indented_error_and_failure_banner() {
    let dir = tempfile::tempdir().unwrap();
    write_schemas(dir.path());
    write_file(dir.path(), "application_alice.yaml", MISSING_AUTHENTICATION);

    let output = run_idval(dir.path());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("✗ application_alice.yaml"));
    // Error detail is indented four spaces beneath the fail marker.
    let error_line = stdout
        .lines()
        .find(|l| l.starts_with("    ") && l.contains("authentication"))
        .unwrap_or_else(|| panic!("no indented error line in:\n{stdout}"));
    assert!(error_line.starts_with("    "));
    assert!(stdout.contains("❌ Some identity files have validation errors."));
    assert!(stdout.contains("Please fix the errors above and run validation again."));
}

#[test]
fn unroutable_file_appears_in_warnings_block() {
    let dir = tempfile::tempdir().unwrap();
    write_schemas(dir.path());
    write_file(dir.path(), "notes.yaml", "anything: here\n");

    let output = run_idval(dir.path());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("✓ notes.yaml"));
    assert!(stdout.contains("⚠️  Warnings:"));
    assert!(stdout.contains("  Cannot determine schema type for file: notes.yaml"));
}

#[test]
fn missing_schema_aborts_before_any_per_file_output() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "schema_application.yaml", SCHEMA);
    write_file(dir.path(), "human_bob.yaml", VALID_IDENTITY);

    let output = run_idval(dir.path());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("❌ Failed to load schemas:"));
    assert!(stdout.contains("Schema file not found:"));
    assert!(stdout.contains("schema_human.yaml"));
    // No per-file section: the run aborts before any data file is examined.
    assert!(!stdout.contains("Validating"));
    assert!(!stdout.contains("✓ human_bob.yaml"));
    assert!(!stdout.contains("✗ "));
}

#[test]
fn empty_directory_warns_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_schemas(dir.path());

    let output = run_idval(dir.path());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Validating"));
    assert!(stdout.contains("  No identity YAML files found to validate"));
    assert!(stdout.contains("🎉 All identity files are valid!"));
}
