//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("EASYREAD_LEVEL").env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

const ARTICLE: &str = "We will commence (at noon) the long walk to the old residence and then we \
will purchase food because we are hungry. However, it is sufficient.";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("simplify"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_and_verbose_flags_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_reads_stdin() {
    cmd()
        .args(["--color", "never", "analyze"])
        .write_stdin("The cat sat on the mat. The dog ran fast.")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>"))
        .stdout(predicate::str::contains("A1"));
}

#[test]
fn analyze_json_reports_metrics() {
    let output = cmd()
        .args(["analyze", "--json", "-"])
        .write_stdin("The cat sat on the mat. The dog ran fast.")
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["words"], 10);
    assert_eq!(json["estimated_level"], 1);
    assert_eq!(json["level_label"], "A1");
    assert_eq!(json["over_max"], false);
}

#[test]
fn analyze_empty_input_is_undetermined() {
    let output = cmd()
        .args(["analyze", "--json"])
        .write_stdin("")
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["estimated_level"], 0);
    assert_eq!(json["level_label"], "?");
}

#[test]
fn analyze_max_level_fails_hard_text() {
    cmd()
        .args(["analyze", "--max-level", "2"])
        .write_stdin(
            "The implementation of the comprehensive organizational restructuring \
             initiative necessitated interdepartmental communication protocols.",
        )
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: A2"));
}

#[test]
fn analyze_max_level_out_of_range_rejected() {
    cmd()
        .args(["analyze", "--max-level", "7"])
        .write_stdin("Hi.")
        .assert()
        .failure();
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Simplify Command
// =============================================================================

#[test]
fn simplify_beginner_from_stdin() {
    cmd()
        .args(["--color", "never", "simplify", "--level", "beginner"])
        .write_stdin(ARTICLE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "We will start the long walk to the old home and. \
             Then we will buy food because. We are hungry. But, it is enough.",
        ));
}

#[test]
fn simplify_json_carries_article_and_metrics() {
    let output = cmd()
        .args(["simplify", "--json", "--level", "a2"])
        .write_stdin(ARTICLE)
        .output()
        .unwrap();
    let json = json_stdout(&output);

    assert_eq!(json["level"], "elementary");
    assert_eq!(json["cefr"], "A2");
    assert_eq!(json["original"], ARTICLE);
    // Elementary keeps the aside and uses the longer sentence limit.
    let simplified = json["simplified"].as_str().unwrap();
    assert!(simplified.contains("(at noon)"));
    assert!(simplified.starts_with("We will start"));
    assert!(json["simplified_metrics"]["flesch_score"].is_f64());
    assert!(json["original_metrics"]["sentences"].as_u64().unwrap() >= 2);
}

#[test]
fn simplify_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("article.txt");
    let output = tmp.path().join("simple.txt");
    std::fs::write(&input, "Please inquire about the purchase").unwrap();

    cmd()
        .args([
            "simplify",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Please ask about the buy.\n");
}

#[test]
fn simplify_respects_input_limit() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("easyread.toml"), "max_input_bytes = 8\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "simplify"])
        .write_stdin("This text is longer than eight bytes.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn simplify_rejects_unknown_level() {
    cmd()
        .args(["simplify", "--level", "expert"])
        .write_stdin("Hi.")
        .assert()
        .failure();
}

// =============================================================================
// Vocab Command
// =============================================================================

#[test]
fn vocab_lists_beginner_table() {
    let output = cmd()
        .args(["vocab", "--json", "--level", "beginner"])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    let substitutions = json["substitutions"].as_array().unwrap();
    assert_eq!(substitutions.len(), 17);
    assert_eq!(substitutions[0]["hard"], "additionally");
    assert_eq!(substitutions[0]["simple"], "also");
}

#[test]
fn vocab_elementary_table_is_larger() {
    let output = cmd()
        .args(["vocab", "--json", "--level", "elementary"])
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["substitutions"].as_array().unwrap().len(), 22);
}

#[test]
fn vocab_word_lookup() {
    cmd()
        .args(["--color", "never", "vocab", "--word", "UTILIZE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("utilize"))
        .stdout(predicate::str::contains("use"));
}
