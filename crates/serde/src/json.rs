//! FHIR JSON entry points.
//!
//! Writing is plain `serde_json`: the derived `Serialize` impls already
//! produce FHIR JSON. Reading parses to a `serde_json::Value` first and then
//! runs the codec directly, so codec failures come back as
//! [`SerdeError::Decode`] with their [`DecodeError`](tessera_serde_support::DecodeError)
//! intact instead of flattened into a `serde_json` message.

use std::path::Path;

use serde::Serialize;
use tessera_serde_support::FhirComplex;

use crate::error::Result;

/// Deserialize a FHIR resource or datatype from a JSON string.
///
/// # Examples
///
/// ```
/// use tessera_fhir::Patient;
/// use tessera_serde::json::from_json_str;
///
/// let json = r#"{"resourceType": "Patient", "id": "example"}"#;
/// let patient: Patient = from_json_str(json).unwrap();
/// assert_eq!(patient.id, Some("example".into()));
/// ```
pub fn from_json_str<T: FhirComplex>(s: &str) -> Result<T> {
    from_json_value(serde_json::from_str(s)?)
}

/// Deserialize a FHIR resource or datatype from a JSON byte slice.
pub fn from_json_slice<T: FhirComplex>(v: &[u8]) -> Result<T> {
    from_json_value(serde_json::from_slice(v)?)
}

/// Deserialize a FHIR resource or datatype from a `serde_json::Value`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tessera_fhir::{DecodeError, Resource};
/// use tessera_serde::{SerdeError, json::from_json_value};
///
/// let err = from_json_value::<Resource>(json!({"resourceType": "NotARealType"})).unwrap_err();
/// assert!(matches!(err, SerdeError::Decode(DecodeError::UnknownResourceType(_))));
/// ```
pub fn from_json_value<T: FhirComplex>(value: serde_json::Value) -> Result<T> {
    Ok(T::decode_value(value)?)
}

/// Read and deserialize a JSON file.
pub fn from_json_file<T: FhirComplex>(path: impl AsRef<Path>) -> Result<T> {
    let bytes = std::fs::read(path)?;
    from_json_slice(&bytes)
}

/// Serialize to a JSON string.
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Serialize to a pretty-printed JSON string.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize to a JSON byte vector.
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec(value)?)
}

/// Serialize to a `serde_json::Value`.
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Decode and re-encode, returning the canonical FHIR JSON for `value`.
///
/// Unknown elements and invalid choice elements fail; everything else
/// comes back in a stable order with empty elements dropped.
pub fn normalize<T: FhirComplex>(value: serde_json::Value) -> Result<serde_json::Value> {
    let decoded: T = from_json_value(value)?;
    to_json_value(&decoded)
}

