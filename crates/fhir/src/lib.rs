//! # Tessera FHIR
//!
//! A strongly-typed FHIR R4 model with a FHIR JSON codec.
//!
//! - **Primitives** are [`Element`]s: a value plus the element id and
//!   extensions that FHIR JSON carries in a `_name` sibling.
//! - **Choice elements** (`value[x]`, `onset[x]`, …) are enums, one variant
//!   per allowed type, so a record can never hold two alternatives at once.
//! - **Resources** are records marked with `#[fhir_serde(resource)]`, and
//!   [`Resource`] holds any of them, dispatching on `resourceType`.
//!
//! Every record implements `serde::Serialize` and `serde::Deserialize`, so
//! `serde_json` works directly:
//!
//! ```
//! use tessera_fhir::{Observation, ObservationValue};
//!
//! let json = r#"{
//!     "resourceType": "Observation",
//!     "status": "final",
//!     "code": {"text": "Dose"},
//!     "valueQuantity": {"value": 5, "unit": "mg"}
//! }"#;
//! let observation: Observation = serde_json::from_str(json).unwrap();
//! match &observation.value {
//!     Some(ObservationValue::Quantity(quantity)) => {
//!         assert_eq!(quantity.unit.as_ref().and_then(|u| u.value.as_deref()), Some("mg"));
//!     }
//!     other => panic!("unexpected value: {other:?}"),
//! }
//! ```
//!
//! Decoding is strict: unknown elements, two alternatives of one choice
//! element, and unknown resource types are all errors
//! ([`DecodeError`](tessera_serde_support::DecodeError)).

pub mod datatypes;
pub mod element;
pub mod primitives;
mod resource;
pub mod resources;
pub mod temporal;

pub use datatypes::*;
pub use element::Element;
pub use primitives::*;
pub use resource::{Resource, is_known_resource_type, resource_registry};
pub use resources::*;
pub use temporal::{
    PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime, TemporalError,
    TemporalPrecision,
};

pub use tessera_fhir_macro::FhirSerde;
pub use tessera_serde_support::{DecodeError, DecodeResult, FhirComplex, FhirResource};
