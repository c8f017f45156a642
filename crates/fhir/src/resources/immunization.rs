use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// A vaccine administration, or a record of one.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct Immunization {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Code,
    pub status_reason: Option<CodeableConcept>,
    pub vaccine_code: CodeableConcept,
    pub patient: Reference,
    pub encounter: Option<Reference>,
    pub occurrence: ImmunizationOccurrence,
    pub recorded: Option<DateTime>,
    pub primary_source: Option<Boolean>,
    pub report_origin: Option<CodeableConcept>,
    pub location: Option<Reference>,
    pub manufacturer: Option<Reference>,
    pub lot_number: Option<String>,
    pub expiration_date: Option<Date>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub dose_quantity: Option<SimpleQuantity>,
    pub performer: Option<Vec<ImmunizationPerformer>>,
    pub note: Option<Vec<Annotation>>,
    pub reason_code: Option<Vec<CodeableConcept>>,
    pub reason_reference: Option<Vec<Reference>>,
    pub is_subpotent: Option<Boolean>,
    pub subpotent_reason: Option<Vec<CodeableConcept>>,
    pub education: Option<Vec<ImmunizationEducation>>,
    pub program_eligibility: Option<Vec<CodeableConcept>>,
    pub funding_source: Option<CodeableConcept>,
    pub reaction: Option<Vec<ImmunizationReaction>>,
    pub protocol_applied: Option<Vec<ImmunizationProtocolApplied>>,
}

/// `Immunization.occurrence[x]`, which is required.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ImmunizationOccurrence {
    DateTime(DateTime),
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ImmunizationPerformer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationEducation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub document_type: Option<String>,
    pub reference: Option<Uri>,
    pub publication_date: Option<DateTime>,
    pub presentation_date: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ImmunizationReaction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub date: Option<DateTime>,
    pub detail: Option<Reference>,
    pub reported: Option<Boolean>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ImmunizationProtocolApplied {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub series: Option<String>,
    pub authority: Option<Reference>,
    pub target_disease: Option<Vec<CodeableConcept>>,
    pub dose_number: ImmunizationProtocolAppliedDoseNumber,
    pub series_doses: Option<ImmunizationProtocolAppliedSeriesDoses>,
}

/// `Immunization.protocolApplied.doseNumber[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ImmunizationProtocolAppliedDoseNumber {
    PositiveInt(PositiveInt),
    String(String),
}

/// `Immunization.protocolApplied.seriesDoses[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ImmunizationProtocolAppliedSeriesDoses {
    PositiveInt(PositiveInt),
    String(String),
}
