//! Runtime support for the `FhirSerde` derive.
//!
//! FHIR JSON flattens two things that a plain `#[derive(Serialize)]` cannot
//! express:
//!
//! - **Primitives with metadata**: `"status": "final"` plus an optional
//!   `"_status": {"id": ..., "extension": [...]}` sibling ([`primitive`]).
//! - **Choice elements**: `value[x]` written as exactly one of
//!   `valueQuantity`, `valueString`, … ([`choice`]).
//!
//! Records produced by the derive write their fields straight into a
//! `serde::ser::SerializeMap` and read them back out of a [`FieldSource`],
//! which lets a field own more than one key. Heterogeneous resource lists
//! are resolved through a [`ResourceRegistry`] keyed on `resourceType`.
//!
//! Decoding is strict: unknown elements, duplicated choice alternatives and
//! unregistered resource types are errors, never silently dropped.

pub mod choice;
pub mod error;
pub mod field;
pub mod primitive;
pub mod registry;
pub mod source;

pub use choice::{ChoiceDecoder, choice_key, describe_choice};
pub use error::{DecodeError, DecodeResult};
pub use field::{
    FhirComplex, FhirField, FhirRepeatable, FhirResource, check_resource_type, decode_complex,
    deserialize_record, read_complex, read_complex_list, required, serialize_record,
    write_complex, write_complex_list,
};
pub use primitive::{
    PrimitiveMetadata, PrimitiveParts, read_primitive, read_primitive_list, write_primitive,
    write_primitive_list,
};
pub use registry::{ResourceDecoder, ResourceRegistry};
pub use source::{FieldSource, metadata_key};

// Generated code names serde through this crate so model crates do not
// need their own `serde` dependency to use the derive.
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;
