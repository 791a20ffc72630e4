use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

#[test]
fn no_arguments_prints_usage_and_exits_one() {
    Command::cargo_bin("ui-recode")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_prints_usage_and_exits_one() {
    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg("--paths=foo.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_exits_one() {
    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg("--path=/nonexistent/app.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn json_file_gets_theme_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.json");
    fs::write(&path, r#"{"a":1}"#).unwrap();

    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg(format!("--path={}", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated JSON file"));

    let patched: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        patched,
        json!({
            "a": 1,
            "theme": "Windows 11",
            "borderRadius": "8px",
            "shadow": "0px 4px 6px rgba(0, 0, 0, 0.1)"
        })
    );
}

#[test]
fn theme_flag_is_accepted_but_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.json");
    fs::write(&path, "{}").unwrap();

    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg(format!("--path={}", path.display()))
        .args(["--theme", "Solarized"])
        .assert()
        .success();

    let patched: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(patched["theme"], "Windows 11");
}

#[test]
fn malformed_json_logs_error_but_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg(format!("--path={}", path.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Error processing file"));
}

#[test]
fn unsupported_extension_is_skipped_with_exit_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "plain text").unwrap();

    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg(format!("--path={}", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsupported file type"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "plain text");
}

#[test]
fn css_patching_is_idempotent_across_runs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("style.css");
    fs::write(&path, "h1 { color: red; }\n").unwrap();

    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg(format!("--path={}", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated CSS file"));
    let first = fs::read_to_string(&path).unwrap();

    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg(format!("--path={}", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated CSS file").not());
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn ui_markup_attributes_are_rewritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("window.ui");
    fs::write(&path, r#"<Window theme="Dark" borderRadius="4px"/>"#).unwrap();

    Command::cargo_bin("ui-recode")
        .unwrap()
        .arg(format!("--path={}", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated UI file"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"<Window theme="Windows 11" borderRadius="8px"/>"#
    );
}

#[test]
fn hexa_recode_without_build_dir_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.hexa");
    fs::write(&path, r#"{"theme": "Dark", "borderRadius": "4px"}"#).unwrap();

    Command::cargo_bin("hexa-recode")
        .unwrap()
        .current_dir(dir.path())
        .arg(format!("--path={}", path.display()))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Build directory not found"));

    // The patch itself ran before the build trigger failed
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(r#""theme": "Windows 11""#));
    assert!(content.contains(r#""borderRadius": "8px""#));
}

#[test]
fn hexa_recode_does_not_handle_css() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("style.css");
    fs::write(&path, "h1 {}\n").unwrap();

    Command::cargo_bin("hexa-recode")
        .unwrap()
        .current_dir(dir.path())
        .arg(format!("--path={}", path.display()))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unsupported file type"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "h1 {}\n");
}
