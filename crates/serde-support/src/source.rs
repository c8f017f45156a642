//! Keyed access to the members of one JSON object during decoding.

use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult};

/// The not-yet-consumed members of a JSON object.
///
/// Field decoders `take` the keys they own. Whatever is left over when the
/// record has been read is an element the record does not define, and
/// [`FieldSource::finish`] reports it.
#[derive(Debug, Default, Clone)]
pub struct FieldSource {
    entries: Map<String, Value>,
}

impl FieldSource {
    pub fn new(entries: Map<String, Value>) -> Self {
        FieldSource { entries }
    }

    /// Wraps `value`, which must be a JSON object. `context` names the
    /// element for the error message.
    pub fn from_value(value: Value, context: &str) -> DecodeResult<Self> {
        match value {
            Value::Object(entries) => Ok(FieldSource { entries }),
            _ => Err(DecodeError::shape(context, "an object")),
        }
    }

    /// Removes `key` and returns its value. An explicit `null` counts as
    /// absent.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        match self.entries.remove(key) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    /// Removes the `_name` metadata sibling of `name`.
    pub fn take_metadata(&mut self, name: &str) -> Option<Value> {
        self.take(&metadata_key(name))
    }

    /// Removes `key`, requiring it to be an array when present.
    pub fn take_array(&mut self, key: &str) -> DecodeResult<Option<Vec<Value>>> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(DecodeError::shape(key, "an array")),
        }
    }

    /// Fails with [`DecodeError::UnknownField`] if any key was not consumed.
    pub fn finish(self) -> DecodeResult<()> {
        match self.entries.into_iter().next() {
            Some((key, _)) => Err(DecodeError::UnknownField(key)),
            None => Ok(()),
        }
    }
}

/// `_name`, the key carrying the id/extension metadata of primitive `name`.
pub fn metadata_key(name: &str) -> String {
    format!("_{name}")
}
