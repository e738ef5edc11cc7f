//! Integration tests for CLI commands.

use serde_json::json;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn make_vocabularies() -> serde_json::Value {
    json!({
        "vocabularies": [
            {
                "id": "http://schema.org/Place",
                "properties": {
                    "name": { "num": "one", "types": [{ "datatype": "text" }] }
                }
            },
            {
                "id": "http://schema.org/Person",
                "itemtype": "https?://schema\\.org/Person",
                "properties": {
                    "name": { "num": "one", "types": [{ "datatype": "text" }] },
                    "birthDate": { "num": "one", "types": [{ "datatype": "date" }] },
                    "homeLocation": { "num": "many", "types": [{ "vocabulary": "http://schema.org/Place" }] }
                },
                "wildcard": { "num": "many", "types": ["any"] }
            }
        ]
    })
}

fn make_scope() -> serde_json::Value {
    json!({
        "type": "http://schema.org/Person",
        "properties": {
            "name": ["Ann", "Bob"],
            "birthDate": ["1815-12-10"],
            "nickname": ["Nan"],
            "homeLocation": [
                { "type": "http://schema.org/Place", "properties": { "name": ["London"] } }
            ]
        }
    })
}

fn write_fixtures(scope: &serde_json::Value) -> (TempDir, String, String) {
    let temp_dir = TempDir::new().unwrap();
    let vocab_path = temp_dir.path().join("vocabularies.json");
    let scope_path = temp_dir.path().join("scope.json");
    fs::write(&vocab_path, make_vocabularies().to_string()).unwrap();
    fs::write(&scope_path, scope.to_string()).unwrap();

    (
        temp_dir,
        vocab_path.to_string_lossy().to_string(),
        scope_path.to_string_lossy().to_string(),
    )
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_itemscope"))
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_validate_command() {
    let (_temp_dir, vocab_path, scope_path) = write_fixtures(&make_scope());

    let (success, stdout, _) = run_cli(&["validate", &scope_path, "--vocabularies", &vocab_path]);
    assert!(success);

    let item: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(item["vocabulary"], "http://schema.org/Person");
    // two names for an exactly-one property
    assert!(item["properties"].get("name").is_none());
    assert_eq!(item["properties"]["nickname"], json!(["Nan"]));
    assert_eq!(
        item["properties"]["homeLocation"][0]["properties"]["name"],
        json!(["London"])
    );
}

#[test]
fn test_validate_array_prints_one_line_per_item() {
    let scopes = json!([make_scope(), { "type": "urn:unknown", "properties": { "x": ["1"] } }]);
    let (_temp_dir, vocab_path, scope_path) = write_fixtures(&scopes);

    let (success, stdout, _) = run_cli(&["validate", &scope_path, "--vocabularies", &vocab_path]);
    assert!(success);

    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2);
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["vocabulary"], "generic");
    assert_eq!(second["properties"]["x"], json!(["1"]));
}

#[test]
fn test_validate_canonical_output() {
    let scope = json!({ "type": "http://schema.org/Place", "properties": { "name": ["Paris"] } });
    let (_temp_dir, vocab_path, scope_path) = write_fixtures(&scope);

    let (success, stdout, _) = run_cli(&[
        "validate",
        &scope_path,
        "--vocabularies",
        &vocab_path,
        "--canonical",
    ]);
    assert!(success);
    assert_eq!(
        stdout.trim(),
        r#"{"id":null,"properties":{"name":["Paris"]},"type":"http://schema.org/Place","vocabulary":"http://schema.org/Place"}"#
    );
}

#[test]
fn test_validate_depth_limit_fails() {
    let (_temp_dir, vocab_path, scope_path) = write_fixtures(&make_scope());

    let (success, _, stderr) = run_cli(&[
        "validate",
        &scope_path,
        "--vocabularies",
        &vocab_path,
        "--max-depth",
        "1",
    ]);
    assert!(!success);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("depth 2"));
}

#[test]
fn test_validate_malformed_input_fails() {
    let (_temp_dir, vocab_path, scope_path) = write_fixtures(&json!({ "properties": {} }));

    let (success, _, stderr) = run_cli(&["validate", &scope_path, "--vocabularies", &vocab_path]);
    assert!(!success);
    assert!(stderr.contains("malformed item scope"));
}

#[test]
fn test_vocabularies_command() {
    let (_temp_dir, vocab_path, _) = write_fixtures(&make_scope());

    let (success, stdout, _) = run_cli(&["vocabularies", &vocab_path]);
    assert!(success);
    assert!(stdout.contains("VOCABULARY"));
    assert!(stdout.contains("http://schema.org/Person"));
}

#[test]
fn test_vocabularies_json_output() {
    let (_temp_dir, vocab_path, _) = write_fixtures(&make_scope());

    let (success, stdout, _) = run_cli(&["vocabularies", &vocab_path, "--json"]);
    assert!(success);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).expect("Invalid JSON"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["itemtype"], "https?://schema\\.org/Person");
}

#[test]
fn test_resolve_command() {
    let (_temp_dir, vocab_path, _) = write_fixtures(&make_scope());

    let (success, stdout, _) = run_cli(&[
        "resolve",
        "https://schema.org/Person",
        "--vocabularies",
        &vocab_path,
    ]);
    assert!(success);
    let schema: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(schema["vocabulary"], "http://schema.org/Person");
    assert_eq!(schema["properties"]["name"]["num"], "one");
}

#[test]
fn test_resolve_unknown_type_uses_generic() {
    let (success, stdout, _) = run_cli(&["resolve", "urn:nothing"]);
    assert!(success);
    let schema: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(schema["vocabulary"], "generic");
    assert_eq!(schema["wildcard"]["types"], json!(["any"]));
}

#[test]
fn test_canonicalize_command() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.json");
    fs::write(&input_path, r#"{"b": 1, "a": [true, null]}"#).unwrap();

    let (success, stdout, _) = run_cli(&["canonicalize", &input_path.to_string_lossy()]);
    assert!(success);
    assert_eq!(stdout.trim(), r#"{"a":[true,null],"b":1}"#);
}
