//! `resourceType` dispatch for heterogeneous resource lists.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::source::FieldSource;

/// Decodes the fields of one concrete resource (its `resourceType` already
/// consumed) into the envelope type `R`.
pub type ResourceDecoder<R> = fn(&mut FieldSource) -> DecodeResult<R>;

/// An immutable map from `resourceType` to decoder.
///
/// Built once with [`ResourceRegistry::with`] calls and then only read, so
/// a registry can sit in a `static` and be shared across threads.
pub struct ResourceRegistry<R> {
    decoders: HashMap<&'static str, ResourceDecoder<R>>,
}

impl<R> Default for ResourceRegistry<R> {
    fn default() -> Self {
        ResourceRegistry {
            decoders: HashMap::new(),
        }
    }
}

impl<R> ResourceRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a decoder. Registering the same type twice keeps the last one.
    pub fn with(mut self, resource_type: &'static str, decoder: ResourceDecoder<R>) -> Self {
        self.decoders.insert(resource_type, decoder);
        self
    }

    pub fn contains(&self, resource_type: &str) -> bool {
        self.decoders.contains_key(resource_type)
    }

    /// The registered spelling of `resource_type`, matched without regard
    /// to ASCII case.
    pub fn canonical_name(&self, resource_type: &str) -> Option<&'static str> {
        self.decoders
            .keys()
            .find(|name| name.eq_ignore_ascii_case(resource_type))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered resource types in alphabetical order.
    pub fn resource_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.decoders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Reads `resourceType` from `source` and hands the rest of the object
    /// to the matching decoder.
    pub fn decode_fields(&self, source: &mut FieldSource) -> DecodeResult<R> {
        let resource_type = match source.take("resourceType") {
            Some(Value::String(resource_type)) => resource_type,
            Some(_) => {
                return Err(DecodeError::UnexpectedShape {
                    field: "resourceType".to_string(),
                    expected: "a string",
                });
            }
            None => return Err(DecodeError::MissingField("resourceType".to_string())),
        };
        let decoder = self
            .decoders
            .get(resource_type.as_str())
            .ok_or(DecodeError::UnknownResourceType(resource_type))?;
        decoder(source)
    }

    /// Decodes a complete resource object, rejecting unknown elements.
    pub fn decode_value(&self, value: Value) -> DecodeResult<R> {
        let mut source = FieldSource::from_value(value, "resource")?;
        let resource = self.decode_fields(&mut source)?;
        source.finish()?;
        Ok(resource)
    }
}
