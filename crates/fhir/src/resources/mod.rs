//! Resource definitions. Each resource is a record with
//! `#[fhir_serde(resource)]`; the [`Resource`](crate::Resource) envelope
//! ties them together.

mod adverse_event;
mod bundle;
mod care_plan;
mod condition;
mod encounter;
mod explanation_of_benefit;
mod immunization;
mod medication_request;
mod observation;
mod patient;
mod procedure;
mod risk_assessment;

pub use adverse_event::*;
pub use bundle::*;
pub use care_plan::*;
pub use condition::*;
pub use encounter::*;
pub use explanation_of_benefit::*;
pub use immunization::*;
pub use medication_request::*;
pub use observation::*;
pub use patient::*;
pub use procedure::*;
pub use risk_assessment::*;
