//! The traits every model type implements to take part in FHIR JSON encoding.
//!
//! FHIR JSON is not a one-key-per-field format: a primitive spreads over
//! `name` and `_name`, a choice element over `nameQuantity`, `nameString`, ….
//! So instead of `serde`'s per-value model, each field writes itself into
//! the parent's `SerializeMap` and reads itself out of the parent's
//! [`FieldSource`], given the field's base name.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::source::FieldSource;

/// A value that can occupy a field of a FHIR record.
pub trait FhirField: Sized {
    /// Writes the value under `name`, plus any sibling keys it needs.
    fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error>;

    /// Reads the value stored under `name`. `Ok(None)` means the field is
    /// absent.
    fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>>;

    /// How the field is named in error messages.
    fn describe(name: &str) -> String {
        name.to_string()
    }
}

/// A value that may appear in a repeating (`0..*` / `1..*`) field.
///
/// Choice elements never repeat in FHIR and do not implement this.
pub trait FhirRepeatable: FhirField {
    fn write_list<M: SerializeMap>(items: &[Self], name: &str, map: &mut M)
    -> Result<(), M::Error>;

    fn read_list(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Vec<Self>>>;
}

impl<T: FhirRepeatable> FhirField for Vec<T> {
    fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error> {
        T::write_list(self, name, map)
    }

    fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>> {
        T::read_list(name, source)
    }
}

// Breaks type cycles such as `Reference.identifier.assigner`.
impl<T: FhirField> FhirField for Box<T> {
    fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error> {
        T::write_field(self, name, map)
    }

    fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>> {
        Ok(T::read_field(name, source)?.map(Box::new))
    }

    fn describe(name: &str) -> String {
        T::describe(name)
    }
}

/// A record: a datatype, backbone element or resource, encoded as a JSON
/// object of its fields.
pub trait FhirComplex: Serialize + Sized {
    /// Writes every populated field into `map`.
    fn encode_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error>;

    /// Consumes this record's fields from `source`. Keys it does not know
    /// are left for the caller to report.
    fn decode_fields(source: &mut FieldSource) -> DecodeResult<Self>;

    /// Decodes a whole JSON object, rejecting unknown elements.
    fn decode_value(value: Value) -> DecodeResult<Self> {
        decode_complex(value, "(root)")
    }
}

/// A record that can stand on its own and is tagged with `resourceType`.
pub trait FhirResource: FhirComplex {
    const RESOURCE_TYPE: &'static str;
}

/// Reads a required field, failing with [`DecodeError::MissingField`].
pub fn required<T: FhirField>(name: &str, source: &mut FieldSource) -> DecodeResult<T> {
    T::read_field(name, source)?.ok_or_else(|| DecodeError::MissingField(T::describe(name)))
}

pub fn decode_complex<T: FhirComplex>(value: Value, name: &str) -> DecodeResult<T> {
    let mut source = FieldSource::from_value(value, name)?;
    let decoded = T::decode_fields(&mut source)?;
    source.finish()?;
    Ok(decoded)
}

pub fn write_complex<T, M>(value: &T, name: &str, map: &mut M) -> Result<(), M::Error>
where
    T: FhirComplex,
    M: SerializeMap,
{
    map.serialize_entry(name, value)
}

pub fn read_complex<T: FhirComplex>(name: &str, source: &mut FieldSource) -> DecodeResult<Option<T>> {
    source
        .take(name)
        .map(|value| decode_complex(value, name))
        .transpose()
}

pub fn write_complex_list<T, M>(items: &[T], name: &str, map: &mut M) -> Result<(), M::Error>
where
    T: FhirComplex,
    M: SerializeMap,
{
    if items.is_empty() {
        return Ok(());
    }
    map.serialize_entry(name, items)
}

pub fn read_complex_list<T: FhirComplex>(
    name: &str,
    source: &mut FieldSource,
) -> DecodeResult<Option<Vec<T>>> {
    let Some(items) = source.take_array(name)? else {
        return Ok(None);
    };
    if items.is_empty() {
        return Ok(None);
    }
    items
        .into_iter()
        .map(|item| {
            if item.is_null() {
                Err(DecodeError::invalid(name, "null entries are not allowed"))
            } else {
                decode_complex(item, name)
            }
        })
        .collect::<DecodeResult<Vec<T>>>()
        .map(Some)
}

/// Checks the `resourceType` of a resource decoded on its own. Absent is
/// fine (the envelope consumed it); a different type is not.
pub fn check_resource_type(expected: &str, source: &mut FieldSource) -> DecodeResult<()> {
    match source.take("resourceType") {
        None => Ok(()),
        Some(Value::String(found)) if found == expected => Ok(()),
        Some(Value::String(found)) => Err(DecodeError::invalid(
            "resourceType",
            format!("expected `{expected}`, found `{found}`"),
        )),
        Some(_) => Err(DecodeError::shape("resourceType", "a string")),
    }
}

/// `Serialize` body shared by every derived record.
pub fn serialize_record<T, S>(
    value: &T,
    resource_type: Option<&str>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: FhirComplex,
    S: Serializer,
{
    let mut map = serializer.serialize_map(None)?;
    if let Some(resource_type) = resource_type {
        map.serialize_entry("resourceType", resource_type)?;
    }
    value.encode_fields(&mut map)?;
    map.end()
}

/// `Deserialize` body shared by every derived record. The input is buffered
/// as a `serde_json::Value` so sibling keys can be paired up.
pub fn deserialize_record<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FhirComplex,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    T::decode_value(value).map_err(serde::de::Error::custom)
}

// Plain JSON scalars without `_name` metadata: element ids, `Extension.url`,
// `Narrative.div`.
macro_rules! plain_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FhirField for $ty {
                fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error> {
                    map.serialize_entry(name, self)
                }

                fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>> {
                    source
                        .take(name)
                        .map(serde_json::from_value)
                        .transpose()
                        .map_err(DecodeError::from)
                }
            }
        )*
    };
}

plain_field!(String, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_string_reads_and_rejects_wrong_type() {
        let mut src = FieldSource::from_value(json!({"url": "http://x", "id": 7}), "t").unwrap();
        let url = String::read_field("url", &mut src).unwrap();
        assert_eq!(url.as_deref(), Some("http://x"));
        assert!(matches!(
            String::read_field("id", &mut src),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn required_reports_missing_field() {
        let mut src = FieldSource::from_value(json!({}), "t").unwrap();
        match required::<String>("url", &mut src) {
            Err(DecodeError::MissingField(name)) => assert_eq!(name, "url"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn resource_type_mismatch_is_rejected() {
        let mut src =
            FieldSource::from_value(json!({"resourceType": "Patient"}), "t").unwrap();
        assert!(matches!(
            check_resource_type("Observation", &mut src),
            Err(DecodeError::InvalidValue { .. })
        ));

        let mut src =
            FieldSource::from_value(json!({"resourceType": "Patient"}), "t").unwrap();
        assert!(check_resource_type("Patient", &mut src).is_ok());
        assert!(src.finish().is_ok());
    }
}
