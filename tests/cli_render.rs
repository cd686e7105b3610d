//! CLI Integration Tests
//!
//! Exercise `--render-html`, the non-interactive render path, end-to-end.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// ============================================================================
// Test Utilities
// ============================================================================

fn render_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio-desktop").expect("Failed to find folio-desktop binary");
    cmd.arg("--render-html");
    cmd
}

// ============================================================================
// Render Tests
// ============================================================================

#[test]
fn test_render_with_reduced_motion() {
    render_cmd()
        .arg("--reduced-motion")
        .arg("--viewport-width")
        .arg("1280")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Chetan Aditya"))
        .stdout(predicate::str::contains(r#"href="/resume.pdf""#))
        .stdout(predicate::str::contains(r#"<div class="globe-container""#));
}

#[test]
fn test_render_with_motion_hides_content_at_mount() {
    render_cmd()
        .arg("--allow-motion")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"class="hero""#))
        .stdout(predicate::str::contains("Chetan Aditya").not());
}

#[test]
fn test_render_mobile_width_drops_globe() {
    render_cmd()
        .arg("--reduced-motion")
        .arg("--viewport-width")
        .arg("479")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<div class="globe-container""#).not());
}

#[test]
fn test_render_uses_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"content": {{"name": "Grace Hopper"}}}}"#).unwrap();

    render_cmd()
        .arg("--reduced-motion")
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Grace Hopper"));
}

#[test]
fn test_invalid_config_fails() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"mobile_breakpoint": 0}}"#).unwrap();

    render_cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_motion_flags_conflict() {
    render_cmd()
        .arg("--reduced-motion")
        .arg("--allow-motion")
        .assert()
        .failure();
}
