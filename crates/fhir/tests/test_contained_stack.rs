//! Contained resources nest a `Resource` inside a resource. These tests keep
//! that working on threads with a 2MB stack (the Tokio worker default), which
//! only holds while `Resource` variants stay boxed.

use tessera_fhir::*;

const OBSERVATION_WITH_CONTAINED: &str = r##"{
  "resourceType": "Observation",
  "contained": [
    {
      "resourceType": "Patient",
      "id": "db2b7000-672c-43e3-8447-e43dcc166950"
    }
  ],
  "text": {
    "status": "generated",
    "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Complete Resource Test</div>"
  },
  "status": "final",
  "code": {
    "coding": [{
      "system": "http://loinc.org",
      "code": "29463-7",
      "display": "Body Weight"
    }]
  },
  "subject": {
    "reference": "#db2b7000-672c-43e3-8447-e43dcc166950"
  },
  "valueQuantity": {
    "value": 85.5,
    "unit": "kg"
  }
}"##;

fn on_small_stack<F: FnOnce() + Send + 'static>(name: &str, f: F) {
    let stack_size = 2 * 1024 * 1024;
    let handle = std::thread::Builder::new()
        .name(name.into())
        .stack_size(stack_size)
        .spawn(f)
        .expect("Failed to spawn thread");
    handle
        .join()
        .expect("Thread panicked, likely a stack overflow decoding a Resource.");
}

#[test]
fn test_resource_enum_is_pointer_sized() {
    let size = std::mem::size_of::<Resource>();
    assert!(
        size <= 16,
        "Resource enum is {} bytes; every variant should be a Box",
        size
    );
}

#[test]
fn test_deserialize_contained_resource_small_stack() {
    on_small_stack("small-stack-contained", || {
        let resource: Resource = serde_json::from_str(OBSERVATION_WITH_CONTAINED)
            .expect("Failed to deserialize Observation with contained Patient");

        if let Resource::Observation(obs) = &resource {
            let contained = obs.contained.as_ref().unwrap();
            assert_eq!(contained.len(), 1);
            assert_eq!(contained[0].resource_type(), "Patient");
            assert_eq!(
                contained[0].id(),
                Some("db2b7000-672c-43e3-8447-e43dcc166950")
            );
        } else {
            panic!("Expected Observation resource, got {:?}", resource);
        }
    });
}

#[test]
fn test_deserialize_resource_directly_small_stack() {
    let json = r#"{
      "resourceType": "Patient",
      "id": "example",
      "name": [{"family": "Smith", "given": ["John"]}]
    }"#;

    on_small_stack("small-stack-direct", move || {
        let resource: Resource =
            serde_json::from_str(json).expect("Failed to deserialize Patient resource");
        assert!(matches!(resource, Resource::Patient(_)));
    });
}

#[test]
fn test_nested_contained_chain_small_stack() {
    // Observation > Condition > Procedure > Patient, each one level deeper.
    let json = serde_json::json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "chain"},
        "contained": [{
            "resourceType": "Condition",
            "subject": {"reference": "#p"},
            "contained": [{
                "resourceType": "Procedure",
                "status": "completed",
                "subject": {"reference": "#p"},
                "contained": [{"resourceType": "Patient", "id": "p"}]
            }]
        }]
    });

    on_small_stack("small-stack-chain", move || {
        let resource: Resource = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&resource).unwrap(), json);
    });
}

#[test]
fn test_contained_entries_must_be_known_resources() {
    let json = r#"{
      "resourceType": "Patient",
      "contained": [{"resourceType": "Spaceship", "id": "x"}]
    }"#;
    let err = serde_json::from_str::<Patient>(json).unwrap_err();
    assert!(err.to_string().contains("Spaceship"), "{err}");
}
