//! Choice elements (`value[x]`, `onset[x]`, …).
//!
//! A choice element is flattened onto the parent object as one of several
//! sibling keys, the base name followed by the type name of the alternative:
//! `valueQuantity`, `valueString`, `valueBoolean`. The model represents the
//! element as an enum, so encoding only ever sees one alternative. Decoding
//! has to look at every possible key and reject inputs that populate more
//! than one.

use crate::error::{DecodeError, DecodeResult};
use crate::field::FhirField;
use crate::source::FieldSource;

/// The wire key of one alternative: `choice_key("value", "Quantity")` is
/// `valueQuantity`.
pub fn choice_key(field: &str, suffix: &str) -> String {
    let mut key = String::with_capacity(field.len() + suffix.len());
    key.push_str(field);
    key.push_str(suffix);
    key
}

/// Collects the alternatives of one choice element found in a source.
///
/// ```ignore
/// let mut decoder = ChoiceDecoder::new("value");
/// decoder.alternative(source, "Quantity", Value::Quantity)?;
/// decoder.alternative(source, "Boolean", Value::Boolean)?;
/// decoder.finish()
/// ```
pub struct ChoiceDecoder<'f, C> {
    field: &'f str,
    found: Vec<(String, C)>,
}

impl<'f, C> ChoiceDecoder<'f, C> {
    pub fn new(field: &'f str) -> Self {
        ChoiceDecoder {
            field,
            found: Vec::new(),
        }
    }

    /// Reads the alternative stored under `field + suffix`, including its
    /// `_` metadata sibling when `T` is a primitive.
    pub fn alternative<T: FhirField>(
        &mut self,
        source: &mut FieldSource,
        suffix: &str,
        wrap: fn(T) -> C,
    ) -> DecodeResult<()> {
        let key = choice_key(self.field, suffix);
        if let Some(value) = T::read_field(&key, source)? {
            self.found.push((key, wrap(value)));
        }
        Ok(())
    }

    /// The single alternative found, `None` if there was none, or
    /// [`DecodeError::MultipleValues`].
    pub fn finish(mut self) -> DecodeResult<Option<C>> {
        match self.found.len() {
            0 => Ok(None),
            1 => Ok(self.found.pop().map(|(_, choice)| choice)),
            _ => Err(DecodeError::MultipleValues {
                field: self.field.to_string(),
                keys: self.found.into_iter().map(|(key, _)| key).collect(),
            }),
        }
    }
}

/// `name[x]`, the conventional spelling of a choice element in messages.
pub fn describe_choice(field: &str) -> String {
    format!("{field}[x]")
}
