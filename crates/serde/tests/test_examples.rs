use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tessera_fhir::{DecodeError, Patient, Resource};
use tessera_serde::{
    SerdeError, from_json_file, from_json_str, json_differences, normalize, to_json_string,
    to_json_value,
};

fn examples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn example_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(examples_dir())
        .expect("tests/data should exist")
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[test]
fn test_json_examples_round_trip() {
    let files = example_files();
    assert!(!files.is_empty(), "no JSON examples found");

    let mut failures = Vec::new();
    for path in &files {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(path).unwrap();
        let original: Value = serde_json::from_str(&content).unwrap();

        let resource: Resource = match from_json_str(&content) {
            Ok(resource) => resource,
            Err(e) => {
                failures.push(format!("{name}: failed to decode: {e}"));
                continue;
            }
        };
        assert_eq!(
            Some(resource.resource_type()),
            original["resourceType"].as_str(),
            "{name}"
        );

        let reserialized = to_json_value(&resource).unwrap();
        let differences = json_differences(&original, &reserialized);
        if differences.is_empty() {
            println!("{name}: OK");
        } else {
            for difference in differences {
                failures.push(format!("{name}: {difference}"));
            }
        }
    }

    assert!(failures.is_empty(), "round trip failures:\n{}", failures.join("\n"));
}

#[test]
fn test_examples_reencode_with_resource_type_first() {
    for path in example_files() {
        let resource: Resource = from_json_file(&path).unwrap();
        let text = to_json_string(&resource).unwrap();
        assert!(
            text.starts_with(&format!(r#"{{"resourceType":"{}""#, resource.resource_type())),
            "{}: {}",
            path.display(),
            text.chars().take(60).collect::<String>()
        );
    }
}

#[test]
fn test_bundle_entries_decode_as_resources() {
    let resource: Resource = from_json_file(examples_dir().join("bundle-searchset.json")).unwrap();
    let Resource::Bundle(bundle) = resource else {
        panic!("expected a Bundle");
    };
    let types: Vec<&str> = bundle.resources().map(|r| r.resource_type()).collect();
    assert_eq!(types, vec!["Patient", "Observation"]);
    let ids: Vec<Option<&str>> = bundle.resources().map(|r| r.id()).collect();
    assert_eq!(ids, vec![Some("347"), Some("3123")]);
}

#[test]
fn test_two_choice_alternatives_are_a_decode_error() {
    let input = r#"{
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "x"},
        "valueString": "a",
        "valueInteger": 1
    }"#;
    let err = from_json_str::<Resource>(input).unwrap_err();
    match err.as_decode() {
        Some(DecodeError::MultipleValues { field, keys }) => {
            assert_eq!(field, "value");
            assert_eq!(keys.len(), 2);
        }
        other => panic!("expected MultipleValues, got {other:?}"),
    }
}

#[test]
fn test_unknown_resource_type() {
    let err = from_json_str::<Resource>(r#"{"resourceType": "NotARealType"}"#).unwrap_err();
    assert!(matches!(
        err,
        SerdeError::Decode(DecodeError::UnknownResourceType(ref t)) if t == "NotARealType"
    ));
    assert!(err.to_string().contains("NotARealType"));
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let err = from_json_str::<Resource>(r#"{"resourceType": "Patient""#).unwrap_err();
    assert!(matches!(err, SerdeError::Json(_)), "{err:?}");
    assert!(err.as_decode().is_none());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = from_json_file::<Resource>(examples_dir().join("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, SerdeError::Io(_)), "{err:?}");
}

#[test]
fn test_typed_decode_rejects_other_resource_types() {
    let err = from_json_str::<Patient>(r#"{"resourceType": "Observation"}"#).unwrap_err();
    assert!(matches!(
        err,
        SerdeError::Decode(DecodeError::InvalidValue { ref field, .. }) if field == "resourceType"
    ));
}

#[test]
fn test_normalize_drops_empty_metadata_and_lists() {
    let input = json!({
        "resourceType": "Patient",
        "active": true,
        "_active": {},
        "name": [],
        "birthDate": "1974-12-25",
        "_birthDate": null
    });
    let normalized = normalize::<Resource>(input).unwrap();
    assert_eq!(
        normalized,
        json!({"resourceType": "Patient", "active": true, "birthDate": "1974-12-25"})
    );
}
