//! Headless mode integration tests

use std::fs;

use layout_studio::headless::normalized_json;
use lstudio_app::open_project;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_headless_output_for_current_layout() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("layout.json"),
        r#"{
  "version": 1,
  "sections": [
    { "id": "a", "type": "hero", "content": { "title": "Acme" } }
  ]
}"#,
    )
    .unwrap();

    let state = open_project(temp.path()).unwrap();
    let json: Value = serde_json::from_str(&normalized_json(&state).unwrap()).unwrap();

    assert_eq!(json["sections"][0]["id"], "a");
    assert_eq!(json["sections"][0]["content"]["title"], "Acme");
}

#[test]
fn test_headless_output_upgrades_legacy_shapes() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("layout.json"),
        r#"[
  { "id": "s", "type": "services", "content": [{ "title": "Design" }] },
  { "id": "c", "type": "carousel", "content": { "slides": 3 } }
]"#,
    )
    .unwrap();

    let state = open_project(temp.path()).unwrap();
    let json: Value = serde_json::from_str(&normalized_json(&state).unwrap()).unwrap();

    let services = &json["sections"][0]["content"]["services"];
    assert_eq!(services[0]["title"], "Design");
    assert!(services[0]["id"].as_str().is_some_and(|id| !id.is_empty()));
    // Unknown section types pass through untouched
    assert_eq!(json["sections"][1]["content"]["slides"], 3);
}

#[test]
fn test_headless_output_without_layout_file() {
    let temp = tempdir().unwrap();

    let state = open_project(temp.path()).unwrap();
    let json: Value = serde_json::from_str(&normalized_json(&state).unwrap()).unwrap();

    assert_eq!(json["sections"].as_array().map(Vec::len), Some(0));
}
