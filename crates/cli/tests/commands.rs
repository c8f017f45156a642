use std::io::Write;
use std::path::PathBuf;

use serde_json::json;
use tempfile::NamedTempFile;
use tessera_cli::commands::{check_files, render, resource_types, round_trip};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_reports_each_file() {
    let good = write_temp(r#"{"resourceType": "Patient", "id": "p1"}"#);
    let bad = write_temp(
        r#"{"resourceType": "Observation", "status": "final", "code": {"text": "x"}, "valueString": "a", "valueBoolean": true}"#,
    );
    let missing = PathBuf::from("/nonexistent/tessera/patient.json");

    let outcomes = check_files(&[
        good.path().to_path_buf(),
        bad.path().to_path_buf(),
        missing.clone(),
    ]);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].result.as_ref().unwrap(), &"Patient");

    let message = format!("{:#}", outcomes[1].result.as_ref().unwrap_err());
    assert!(message.contains("value[x]"), "{message}");

    let message = format!("{:#}", outcomes[2].result.as_ref().unwrap_err());
    assert!(message.contains("failed to read"), "{message}");
    assert_eq!(outcomes[2].path, missing);
}

#[test]
fn test_round_trip_without_verify() {
    let file = write_temp(r#"{"id": "p1", "resourceType": "Patient", "active": true, "_active": {}}"#);
    let result = round_trip(file.path(), false).unwrap();
    assert_eq!(result.resource_type, "Patient");
    assert_eq!(
        result.output,
        json!({"resourceType": "Patient", "id": "p1", "active": true})
    );
    assert!(result.differences.is_empty());
}

#[test]
fn test_round_trip_verify_reports_dropped_metadata() {
    let file = write_temp(
        r#"{"resourceType": "Patient", "active": true, "_active": {}, "name": []}"#,
    );
    let result = round_trip(file.path(), true).unwrap();
    let paths: Vec<&str> = result.differences.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["_active", "name"]);
}

#[test]
fn test_round_trip_verify_clean_document() {
    let file = write_temp(
        r#"{"resourceType": "Condition", "subject": {"reference": "Patient/1"}, "onsetString": "childhood"}"#,
    );
    let result = round_trip(file.path(), true).unwrap();
    assert!(result.differences.is_empty(), "{:?}", result.differences);
}

#[test]
fn test_round_trip_unknown_resource_type_fails() {
    let file = write_temp(r#"{"resourceType": "Spaceship"}"#);
    let err = round_trip(file.path(), false).unwrap_err();
    assert!(format!("{err:#}").contains("Spaceship"));
}

#[test]
fn test_resource_types_are_sorted() {
    let types = resource_types();
    assert_eq!(types.len(), 12);
    assert!(types.windows(2).all(|w| w[0] < w[1]));
    assert!(types.contains(&"Bundle"));
}

#[test]
fn test_render_pretty_and_compact() {
    let value = json!({"id": "p1"});
    assert_eq!(render(&value, false).unwrap(), r#"{"id":"p1"}"#);
    assert_eq!(render(&value, true).unwrap(), "{\n  \"id\": \"p1\"\n}");
}
