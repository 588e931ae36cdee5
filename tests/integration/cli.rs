//! The `sitefind` binary run as a subprocess.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use super::common::{FIXTURES_CONFIG, FIXTURES_MANIFEST};

fn sitefind(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitefind"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run sitefind")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_search_json() {
    let output = sitefind(&["search", FIXTURES_MANIFEST, "web", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["state"], "results");
    assert_eq!(json["results"]["total"], 3);
}

#[test]
fn test_search_with_category_and_config() {
    let output = sitefind(&[
        "search",
        FIXTURES_MANIFEST,
        "web",
        "--category",
        "services",
        "--config",
        FIXTURES_CONFIG,
        "--json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["results"]["total"], 1);
    assert!(json["results"]["categories"]["service"].is_array());
}

#[test]
fn test_search_text_output() {
    let output = sitefind(&["search", FIXTURES_MANIFEST, "web"]);
    let text = stdout(&output);
    assert!(text.contains("3 results for \"web\""));
    assert!(text.contains("Services (1)"));
    // Markers rendered as brackets without color
    assert!(text.contains("[Web] Development"));
}

#[test]
fn test_short_query_message() {
    let output = sitefind(&["search", FIXTURES_MANIFEST, "w"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Query too short"));
}

#[test]
fn test_missing_manifest_still_answers() {
    let output = sitefind(&["search", "does/not/exist.json", "web", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["state"], "empty");
}

#[test]
fn test_unknown_category_fails() {
    let output = sitefind(&["search", FIXTURES_MANIFEST, "web", "-c", "podcast"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("podcast"));
}

#[test]
fn test_inspect() {
    let output = sitefind(&["inspect", FIXTURES_MANIFEST]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("documents  9"));
    assert!(text.contains("POPULAR SEARCHES"));
}

#[test]
fn test_inspect_missing_manifest_fails() {
    let output = sitefind(&["inspect", "does/not/exist.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_interactive_navigation() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sitefind"))
        .args(["interactive", FIXTURES_MANIFEST])
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run sitefind");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"web\n:down\n:enter\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("3 results for \"web\""));
    assert!(text.contains("→ /services/web-development"));
}

#[test]
fn test_interactive_survives_unknown_category() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sitefind"))
        .args(["interactive", FIXTURES_MANIFEST])
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run sitefind");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"web\n:category podcast\n:category services\nweb\n:enter\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown category 'podcast'"));
    let text = stdout(&output);
    assert!(text.contains("1 result for \"web\""));
    assert!(text.contains("→ /services/web-development"));
}
