use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// An unintended harmful event, actual or potential, involving a subject.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct AdverseEvent {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Identifier>,
    pub actuality: Code,
    pub category: Option<Vec<CodeableConcept>>,
    pub event: Option<CodeableConcept>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub date: Option<DateTime>,
    pub detected: Option<DateTime>,
    pub recorded_date: Option<DateTime>,
    pub resulting_condition: Option<Vec<Reference>>,
    pub location: Option<Reference>,
    pub seriousness: Option<CodeableConcept>,
    pub severity: Option<CodeableConcept>,
    pub outcome: Option<CodeableConcept>,
    pub recorder: Option<Reference>,
    pub contributor: Option<Vec<Reference>>,
    pub suspect_entity: Option<Vec<AdverseEventSuspectEntity>>,
    pub subject_medical_history: Option<Vec<Reference>>,
    pub reference_document: Option<Vec<Reference>>,
    pub study: Option<Vec<Reference>>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct AdverseEventSuspectEntity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub instance: Reference,
    pub causality: Option<Vec<AdverseEventSuspectEntityCausality>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct AdverseEventSuspectEntityCausality {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub assessment: Option<CodeableConcept>,
    pub product_relatedness: Option<String>,
    pub author: Option<Reference>,
    pub method: Option<CodeableConcept>,
}
