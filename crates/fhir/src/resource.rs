//! The `Resource` envelope: any modelled resource, tagged by `resourceType`.

use once_cell::sync::Lazy;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tessera_serde_support::{
    DecodeResult, FhirComplex, FhirField, FhirRepeatable, FhirResource, FieldSource,
    ResourceRegistry, deserialize_record, read_complex, read_complex_list, serialize_record,
    write_complex, write_complex_list,
};

use crate::resources::*;

macro_rules! resources {
    ($($name:ident),* $(,)?) => {
        /// Any resource this crate models.
        ///
        /// Used wherever FHIR allows a resource of any type: `contained`,
        /// `Bundle.entry.resource`. Variants are boxed so the enum stays
        /// pointer-sized however large the resources grow; deeply nested
        /// `contained` chains would otherwise overflow small thread stacks.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $($name(Box<$name>),)*
        }

        impl Resource {
            /// The `resourceType` discriminator of the wrapped resource.
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $(Resource::$name(_) => <$name as FhirResource>::RESOURCE_TYPE,)*
                }
            }

            /// The logical id, if the resource has one.
            pub fn id(&self) -> Option<&str> {
                match self {
                    $(Resource::$name(resource) => resource.id.as_ref()?.value.as_deref(),)*
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(Box::new(resource))
                }
            }
        )*

        fn build_registry() -> ResourceRegistry<Resource> {
            ResourceRegistry::new()
                $(.with(<$name as FhirResource>::RESOURCE_TYPE, |source| {
                    <$name as FhirComplex>::decode_fields(source).map(Resource::from)
                }))*
        }

        impl Resource {
            fn encode_inner<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
                match self {
                    $(Resource::$name(resource) => resource.encode_fields(map),)*
                }
            }
        }
    };
}

resources! {
    AdverseEvent,
    Bundle,
    CarePlan,
    Condition,
    Encounter,
    ExplanationOfBenefit,
    Immunization,
    MedicationRequest,
    Observation,
    Patient,
    Procedure,
    RiskAssessment,
}

static REGISTRY: Lazy<ResourceRegistry<Resource>> = Lazy::new(|| {
    let registry = build_registry();
    tracing::debug!(resource_types = registry.len(), "built resource registry");
    registry
});

/// The process-wide `resourceType` → decoder table.
pub fn resource_registry() -> &'static ResourceRegistry<Resource> {
    &REGISTRY
}

/// Whether `name` is a modelled resource type, ignoring ASCII case.
pub fn is_known_resource_type(name: &str) -> bool {
    REGISTRY.canonical_name(name).is_some()
}

impl FhirComplex for Resource {
    fn encode_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("resourceType", self.resource_type())?;
        self.encode_inner(map)
    }

    fn decode_fields(source: &mut FieldSource) -> DecodeResult<Self> {
        REGISTRY.decode_fields(source)
    }
}

impl FhirField for Resource {
    fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error> {
        write_complex(self, name, map)
    }

    fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>> {
        read_complex(name, source)
    }
}

impl FhirRepeatable for Resource {
    fn write_list<M: SerializeMap>(items: &[Self], name: &str, map: &mut M) -> Result<(), M::Error> {
        write_complex_list(items, name, map)
    }

    fn read_list(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Vec<Self>>> {
        read_complex_list(name, source)
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_record(self, None, serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_record(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodeableConcept, Reference};
    use serde_json::json;
    use tessera_serde_support::DecodeError;

    #[test]
    fn registry_lists_every_variant() {
        let registry = resource_registry();
        assert_eq!(registry.len(), 12);
        assert!(registry.contains("ExplanationOfBenefit"));
        assert_eq!(registry.resource_types().first(), Some(&"AdverseEvent"));
    }

    #[test]
    fn known_types_ignore_case() {
        assert!(is_known_resource_type("Patient"));
        assert!(is_known_resource_type("riskassessment"));
        assert!(!is_known_resource_type("NotARealType"));
    }

    #[test]
    fn dispatches_on_resource_type() {
        let resource = Resource::decode_value(json!({
            "resourceType": "Condition",
            "id": "c1",
            "subject": {"reference": "Patient/1"}
        }))
        .unwrap();
        assert_eq!(resource.resource_type(), "Condition");
        assert_eq!(resource.id(), Some("c1"));
        match resource {
            Resource::Condition(condition) => {
                assert_eq!(condition.subject, Reference::to("Patient/1"));
            }
            other => panic!("expected a Condition, got {}", other.resource_type()),
        }
    }

    #[test]
    fn unknown_resource_type_fails() {
        let err = Resource::decode_value(json!({"resourceType": "NotARealType", "id": "x"}))
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnknownResourceType(ref t) if t == "NotARealType"));
    }

    #[test]
    fn resource_type_is_written_first() {
        let resource = Resource::from(Observation::new(
            "final",
            CodeableConcept::from_text("Heart rate"),
        ));
        let text = serde_json::to_string(&resource).unwrap();
        assert!(text.starts_with(r#"{"resourceType":"Observation""#), "{text}");
    }
}
