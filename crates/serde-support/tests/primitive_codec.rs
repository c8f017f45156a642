//! Primitive split/merge behaviour, exercised through a minimal hand-written
//! element and record.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use tessera_serde_support::{
    DecodeError, DecodeResult, FhirComplex, FhirField, FhirRepeatable, FieldSource,
    PrimitiveMetadata, PrimitiveParts, decode_complex, read_complex, read_complex_list,
    read_primitive, read_primitive_list, required, serialize_record, write_complex,
    write_complex_list, write_primitive, write_primitive_list,
};

#[derive(Debug, Clone, PartialEq)]
struct Ext {
    url: String,
}

impl Serialize for Ext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_record(self, None, serializer)
    }
}

impl FhirComplex for Ext {
    fn encode_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        self.url.write_field("url", map)
    }

    fn decode_fields(source: &mut FieldSource) -> DecodeResult<Self> {
        Ok(Ext {
            url: required("url", source)?,
        })
    }
}

impl FhirField for Ext {
    fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error> {
        write_complex(self, name, map)
    }

    fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>> {
        read_complex(name, source)
    }
}

impl FhirRepeatable for Ext {
    fn write_list<M: SerializeMap>(items: &[Self], name: &str, map: &mut M) -> Result<(), M::Error> {
        write_complex_list(items, name, map)
    }

    fn read_list(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Vec<Self>>> {
        read_complex_list(name, source)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Prim<V> {
    id: Option<String>,
    extension: Option<Vec<Ext>>,
    value: Option<V>,
}

impl<V> Prim<V> {
    fn of(value: V) -> Self {
        Prim {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    fn empty() -> Self {
        Prim {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V: Serialize + DeserializeOwned> PrimitiveParts for Prim<V> {
    type Value = V;
    type Extension = Ext;

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[Ext] {
        self.extension.as_deref().unwrap_or_default()
    }

    fn from_parts(value: Option<V>, metadata: PrimitiveMetadata<Ext>) -> Self {
        Prim {
            id: metadata.id,
            extension: metadata.extension,
            value,
        }
    }
}

impl<V: Serialize + DeserializeOwned> FhirField for Prim<V> {
    fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error> {
        write_primitive(self, name, map)
    }

    fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>> {
        read_primitive(name, source)
    }
}

impl<V: Serialize + DeserializeOwned> FhirRepeatable for Prim<V> {
    fn write_list<M: SerializeMap>(items: &[Self], name: &str, map: &mut M) -> Result<(), M::Error> {
        write_primitive_list(items, name, map)
    }

    fn read_list(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Vec<Self>>> {
        read_primitive_list(name, source)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Holder {
    status: Option<Prim<String>>,
    active: Option<Prim<bool>>,
    given: Option<Vec<Prim<String>>>,
}

impl Serialize for Holder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_record(self, None, serializer)
    }
}

impl FhirComplex for Holder {
    fn encode_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(status) = &self.status {
            status.write_field("status", map)?;
        }
        if let Some(active) = &self.active {
            active.write_field("active", map)?;
        }
        if let Some(given) = &self.given {
            given.write_field("given", map)?;
        }
        Ok(())
    }

    fn decode_fields(source: &mut FieldSource) -> DecodeResult<Self> {
        Ok(Holder {
            status: FhirField::read_field("status", source)?,
            active: FhirField::read_field("active", source)?,
            given: FhirField::read_field("given", source)?,
        })
    }
}

fn decode(value: Value) -> DecodeResult<Holder> {
    decode_complex(value, "holder")
}

fn encode(holder: &Holder) -> Value {
    serde_json::to_value(holder).unwrap()
}

#[test]
fn value_and_metadata_merge_into_one_primitive() {
    let holder = decode(json!({
        "status": "final",
        "_status": {"id": "s1", "extension": [{"url": "http://example.org/a"}]}
    }))
    .unwrap();
    let status = holder.status.unwrap();
    assert_eq!(status.value.as_deref(), Some("final"));
    assert_eq!(status.id.as_deref(), Some("s1"));
    assert_eq!(
        status.extension,
        Some(vec![Ext {
            url: "http://example.org/a".to_string()
        }])
    );
}

#[test]
fn metadata_alone_produces_a_primitive() {
    let holder = decode(json!({"_status": {"id": "x"}})).unwrap();
    let status = holder.status.expect("metadata-only primitive must be present");
    assert_eq!(status.value, None);
    assert_eq!(status.id.as_deref(), Some("x"));
}

#[test]
fn empty_or_null_metadata_counts_as_absent() {
    let holder = decode(json!({"_status": {}, "_active": null})).unwrap();
    assert_eq!(holder.status, None);
    assert_eq!(holder.active, None);

    let holder = decode(json!({"status": "final", "_status": {"extension": []}})).unwrap();
    assert_eq!(holder.status, Some(Prim::of("final".to_string())));
}

#[test]
fn empty_primitive_writes_nothing() {
    let holder = Holder {
        status: Some(Prim::empty()),
        active: Some(Prim {
            id: None,
            extension: Some(vec![]),
            value: None,
        }),
        given: None,
    };
    assert_eq!(encode(&holder), json!({}));
}

#[test]
fn metadata_is_written_only_when_present() {
    let holder = Holder {
        status: Some(Prim::of("final".to_string())),
        active: Some(Prim {
            id: Some("a1".to_string()),
            extension: None,
            value: None,
        }),
        given: None,
    };
    assert_eq!(
        encode(&holder),
        json!({"status": "final", "_active": {"id": "a1"}})
    );
}

#[test]
fn repeated_primitives_use_parallel_arrays() {
    let input = json!({
        "given": ["Alice", null],
        "_given": [null, {"id": "g1"}]
    });
    let holder = decode(input.clone()).unwrap();
    let given = holder.given.as_ref().unwrap();
    assert_eq!(given.len(), 2);
    assert_eq!(given[0], Prim::of("Alice".to_string()));
    assert_eq!(given[1].value, None);
    assert_eq!(given[1].id.as_deref(), Some("g1"));

    assert_eq!(encode(&holder), input);
}

#[test]
fn parallel_array_is_omitted_when_unused() {
    let holder = Holder {
        status: None,
        active: None,
        given: Some(vec![Prim::of("A".to_string()), Prim::of("B".to_string())]),
    };
    assert_eq!(encode(&holder), json!({"given": ["A", "B"]}));
}

#[test]
fn mismatched_parallel_arrays_fail() {
    let err = decode(json!({"given": ["A", "B"], "_given": [null]})).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidValue { ref field, .. } if field == "given"));
}

#[test]
fn empty_arrays_decode_as_absent() {
    let holder = decode(json!({"given": []})).unwrap();
    assert_eq!(holder.given, None);
}

#[test]
fn unknown_metadata_members_are_rejected() {
    let err = decode(json!({"_status": {"id": "x", "colour": "red"}})).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownField(ref f) if f == "colour"));
}

#[test]
fn type_mismatch_surfaces_the_json_error() {
    let err = decode(json!({"active": "yes"})).unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn repeated_positions_without_value_or_metadata_are_rejected() {
    for input in [
        json!({"given": [null]}),
        json!({"_given": [null]}),
        json!({"given": ["A", null], "_given": [null, {}]}),
    ] {
        let err = decode(input.clone()).unwrap_err();
        assert!(
            matches!(err, DecodeError::InvalidValue { ref field, .. } if field == "given"),
            "{input}: {err:?}"
        );
    }
}

#[test]
fn accepted_parallel_arrays_survive_re_encoding() {
    let holder = decode(json!({
        "given": ["A", null, "C"],
        "_given": [{"id": "g0"}, {"id": "g1"}, null]
    }))
    .unwrap();
    let again = decode(encode(&holder)).unwrap();
    assert_eq!(again, holder);
}
