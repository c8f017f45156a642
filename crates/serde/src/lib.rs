//! # Tessera FHIR JSON
//!
//! Typed entry points for reading and writing FHIR JSON with the
//! `tessera-fhir` model.
//!
//! The model types implement `serde::Serialize` / `serde::Deserialize`
//! themselves, so plain `serde_json` calls work too. The functions here add
//! one thing: decode failures are returned as [`SerdeError::Decode`] holding
//! the codec's [`DecodeError`](tessera_serde_support::DecodeError), which
//! callers can match on (`MultipleValues`, `UnknownResourceType`, …).
//!
//! ```
//! use tessera_fhir::Resource;
//! use tessera_serde::{from_json_str, to_json_string};
//!
//! let input = r#"{"resourceType":"Patient","id":"example","active":true}"#;
//! let resource: Resource = from_json_str(input).unwrap();
//! assert_eq!(resource.resource_type(), "Patient");
//! assert_eq!(to_json_string(&resource).unwrap(), input);
//! ```

pub mod diff;
pub mod error;
pub mod json;

pub use diff::{JsonDifference, json_differences};
pub use error::{Result, SerdeError};

pub use json::{
    from_json_file, from_json_slice, from_json_str, from_json_value, normalize, to_json_string,
    to_json_string_pretty, to_json_value, to_json_vec,
};
