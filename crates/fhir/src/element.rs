//! The primitive element: a scalar value plus its FHIR element metadata.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use tessera_serde_support::{
    DecodeResult, FhirField, FhirRepeatable, FieldSource, PrimitiveMetadata, PrimitiveParts,
    read_primitive, read_primitive_list, write_primitive, write_primitive_list,
};

/// A FHIR primitive (`boolean`, `string`, `dateTime`, …).
///
/// Any of the three parts may be missing: a value without metadata is the
/// common case, but FHIR also allows an element that carries only an id or
/// extensions, e.g. a `status` whose value is replaced by a
/// data-absent-reason extension.
///
/// On the wire the value and the metadata are split across `name` and
/// `_name`; see [`tessera_serde_support::primitive`].
///
/// # Type parameters
/// - `V`: the Rust type of the value
/// - `E`: the extension type
#[derive(Debug, Clone, PartialEq)]
pub struct Element<V, E> {
    pub id: Option<String>,
    pub extension: Option<Vec<E>>,
    pub value: Option<V>,
}

impl<V, E> Default for Element<V, E> {
    fn default() -> Self {
        Element {
            id: None,
            extension: None,
            value: None,
        }
    }
}

impl<V, E> Element<V, E> {
    pub fn new(value: V) -> Self {
        Element {
            id: None,
            extension: None,
            value: Some(value),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends an extension.
    pub fn with_extension(mut self, extension: E) -> Self {
        self.extension.get_or_insert_with(Vec::new).push(extension);
        self
    }

    pub fn extensions(&self) -> &[E] {
        self.extension.as_deref().unwrap_or_default()
    }

    /// True when the element carries an id or at least one extension.
    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || !self.extensions().is_empty()
    }

    /// True when nothing would be written for this element.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && !self.has_metadata()
    }
}

impl<V, E> From<V> for Element<V, E> {
    fn from(value: V) -> Self {
        Element::new(value)
    }
}

impl<E> From<&str> for Element<String, E> {
    fn from(value: &str) -> Self {
        Element::new(value.to_string())
    }
}

impl<V, E> PrimitiveParts for Element<V, E>
where
    V: Serialize + DeserializeOwned,
    E: FhirRepeatable + Serialize,
{
    type Value = V;
    type Extension = E;

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn extension(&self) -> &[E] {
        self.extensions()
    }

    fn from_parts(value: Option<V>, metadata: PrimitiveMetadata<E>) -> Self {
        Element {
            id: metadata.id,
            extension: metadata.extension,
            value,
        }
    }
}

impl<V, E> FhirField for Element<V, E>
where
    V: Serialize + DeserializeOwned,
    E: FhirRepeatable + Serialize,
{
    fn write_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<(), M::Error> {
        write_primitive(self, name, map)
    }

    fn read_field(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Self>> {
        read_primitive(name, source)
    }
}

impl<V, E> FhirRepeatable for Element<V, E>
where
    V: Serialize + DeserializeOwned,
    E: FhirRepeatable + Serialize,
{
    fn write_list<M: SerializeMap>(items: &[Self], name: &str, map: &mut M) -> Result<(), M::Error> {
        write_primitive_list(items, name, map)
    }

    fn read_list(name: &str, source: &mut FieldSource) -> DecodeResult<Option<Vec<Self>>> {
        read_primitive_list(name, source)
    }
}
