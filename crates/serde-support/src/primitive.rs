//! Split/merge of FHIR primitives.
//!
//! On the wire a primitive lives in two places: the bare value under `name`
//! and its id/extensions under `_name`:
//!
//! ```json
//! {
//!   "birthDate": "1974-12-25",
//!   "_birthDate": { "id": "bd1", "extension": [ ... ] }
//! }
//! ```
//!
//! Repeated primitives use parallel arrays padded with `null`:
//!
//! ```json
//! { "given": ["Alice", null], "_given": [null, { "id": "g1" }] }
//! ```
//!
//! Everything here is generic over [`PrimitiveParts`], so the model's
//! primitive element type implements that trait once and every field of
//! every record shares these routines.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::field::{FhirField, FhirRepeatable};
use crate::source::{FieldSource, metadata_key};

/// The id and extensions carried by a primitive, i.e. the `_name` object.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveMetadata<E> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
}

impl<E> Default for PrimitiveMetadata<E> {
    fn default() -> Self {
        PrimitiveMetadata {
            id: None,
            extension: None,
        }
    }
}

impl<E> PrimitiveMetadata<E> {
    /// `{}` carries nothing and is treated exactly like an absent object.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.extension.as_ref().is_none_or(|ext| ext.is_empty())
    }
}

/// Access to the three parts of a primitive element.
pub trait PrimitiveParts: Sized {
    type Value: Serialize + DeserializeOwned;
    type Extension: FhirRepeatable + Serialize;

    fn value(&self) -> Option<&Self::Value>;
    fn id(&self) -> Option<&str>;
    fn extension(&self) -> &[Self::Extension];
    fn from_parts(value: Option<Self::Value>, metadata: PrimitiveMetadata<Self::Extension>) -> Self;
}

/// Borrowed form of the `_name` object used while encoding.
#[derive(Serialize)]
struct MetadataRef<'a, E> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    extension: &'a [E],
}

fn is_empty_slice<E>(items: &&[E]) -> bool {
    items.is_empty()
}

fn has_metadata<P: PrimitiveParts>(primitive: &P) -> bool {
    primitive.id().is_some() || !primitive.extension().is_empty()
}

fn metadata_ref<P: PrimitiveParts>(primitive: &P) -> MetadataRef<'_, P::Extension> {
    MetadataRef {
        id: primitive.id(),
        extension: primitive.extension(),
    }
}

fn read_metadata<E: FhirRepeatable>(name: &str, value: Value) -> DecodeResult<PrimitiveMetadata<E>> {
    let mut source = FieldSource::from_value(value, &metadata_key(name))?;
    let id = String::read_field("id", &mut source)?;
    let extension = E::read_list("extension", &mut source)?;
    source.finish()?;
    Ok(PrimitiveMetadata { id, extension })
}

/// Writes `name` if the value is set and `_name` if there is metadata.
/// An empty primitive writes nothing.
pub fn write_primitive<P, M>(primitive: &P, name: &str, map: &mut M) -> Result<(), M::Error>
where
    P: PrimitiveParts,
    M: SerializeMap,
{
    if let Some(value) = primitive.value() {
        map.serialize_entry(name, value)?;
    }
    if has_metadata(primitive) {
        map.serialize_entry(&metadata_key(name), &metadata_ref(primitive))?;
    }
    Ok(())
}

/// Merges `name` and `_name` into one primitive. Metadata alone is enough
/// to produce a value; neither present means the field is absent.
pub fn read_primitive<P: PrimitiveParts>(
    name: &str,
    source: &mut FieldSource,
) -> DecodeResult<Option<P>> {
    let value = source.take(name);
    let metadata = source
        .take_metadata(name)
        .map(|raw| read_metadata::<P::Extension>(name, raw))
        .transpose()?
        .filter(|metadata| !metadata.is_empty());

    if value.is_none() && metadata.is_none() {
        return Ok(None);
    }

    let value = value.map(serde_json::from_value).transpose()?;
    Ok(Some(P::from_parts(value, metadata.unwrap_or_default())))
}

/// Writes a repeated primitive as the `name` / `_name` parallel arrays. Each
/// array is only written when at least one position needs it.
pub fn write_primitive_list<P, M>(items: &[P], name: &str, map: &mut M) -> Result<(), M::Error>
where
    P: PrimitiveParts,
    M: SerializeMap,
{
    if items.iter().any(|item| item.value().is_some()) {
        let values: Vec<Option<&P::Value>> = items.iter().map(|item| item.value()).collect();
        map.serialize_entry(name, &values)?;
    }
    if items.iter().any(has_metadata) {
        let metadata: Vec<Option<MetadataRef<'_, P::Extension>>> = items
            .iter()
            .map(|item| has_metadata(item).then(|| metadata_ref(item)))
            .collect();
        map.serialize_entry(&metadata_key(name), &metadata)?;
    }
    Ok(())
}

/// Zips the `name` / `_name` arrays back into primitives, position by
/// position. Every position must carry a value, metadata, or both.
pub fn read_primitive_list<P: PrimitiveParts>(
    name: &str,
    source: &mut FieldSource,
) -> DecodeResult<Option<Vec<P>>> {
    let values = source.take_array(name)?;
    let metadata = source.take_array(&metadata_key(name))?;

    let len = match (&values, &metadata) {
        (None, None) => return Ok(None),
        (Some(values), Some(metadata)) if values.len() != metadata.len() => {
            return Err(DecodeError::invalid(
                name,
                format!(
                    "`{name}` has {} entries but `{}` has {}",
                    values.len(),
                    metadata_key(name),
                    metadata.len()
                ),
            ));
        }
        (Some(values), _) => values.len(),
        (None, Some(metadata)) => metadata.len(),
    };
    if len == 0 {
        return Ok(None);
    }

    let mut values = values.map(Vec::into_iter);
    let mut metadata = metadata.map(Vec::into_iter);
    let mut items = Vec::with_capacity(len);
    for index in 0..len {
        let value: Option<P::Value> = values
            .as_mut()
            .and_then(|iter| iter.next())
            .filter(|value| !value.is_null())
            .map(serde_json::from_value)
            .transpose()?;
        let meta = metadata
            .as_mut()
            .and_then(|iter| iter.next())
            .filter(|meta| !meta.is_null())
            .map(|raw| read_metadata::<P::Extension>(name, raw))
            .transpose()?
            .unwrap_or_default();
        // Such a position would vanish on re-encoding.
        if value.is_none() && meta.is_empty() {
            return Err(DecodeError::invalid(
                name,
                format!("entry {index} has neither a value nor metadata"),
            ));
        }
        items.push(P::from_parts(value, meta));
    }
    Ok(Some(items))
}
