//! Decode errors raised by the FHIR JSON codec.

use thiserror::Error;

/// Everything that can go wrong while turning FHIR JSON into model types.
///
/// Encoding has no counterpart: a well-formed in-memory value always encodes,
/// because the choice and primitive invariants are enforced by the types.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// More than one alternative of a choice element was populated.
    #[error("multiple values supplied for choice element `{field}[x]`: {}", keys.join(", "))]
    MultipleValues {
        /// Base name of the choice element (e.g. `value`).
        field: String,
        /// Every wire key that resolved to a value, in scan order.
        keys: Vec<String>,
    },

    /// A `resourceType` discriminator that is not in the registry.
    #[error("unknown resource type `{0}`")]
    UnknownResourceType(String),

    /// A required element is absent.
    #[error("missing required element `{0}`")]
    MissingField(String),

    /// A key that no field of the record consumed.
    #[error("unexpected element `{0}`")]
    UnknownField(String),

    /// The JSON value has the wrong structural kind (object, array).
    #[error("expected {expected} for `{field}`")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
    },

    /// Structurally valid JSON that violates a wire-format rule.
    #[error("invalid value for `{field}`: {message}")]
    InvalidValue { field: String, message: String },

    /// Errors from `serde_json`, passed through untouched.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn shape(field: &str, expected: &'static str) -> Self {
        DecodeError::UnexpectedShape {
            field: field.to_string(),
            expected,
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        DecodeError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result alias used throughout the codec runtime.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_values_message_names_field_and_keys() {
        let err = DecodeError::MultipleValues {
            field: "value".to_string(),
            keys: vec!["valueString".to_string(), "valueBoolean".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "multiple values supplied for choice element `value[x]`: valueString, valueBoolean"
        );
    }

    #[test]
    fn unknown_resource_type_message() {
        let err = DecodeError::UnknownResourceType("NotARealType".to_string());
        assert_eq!(err.to_string(), "unknown resource type `NotARealType`");
    }
}
