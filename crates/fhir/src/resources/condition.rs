use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// A clinical condition, problem, diagnosis or other concern.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct Condition {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub clinical_status: Option<CodeableConcept>,
    pub verification_status: Option<CodeableConcept>,
    pub category: Option<Vec<CodeableConcept>>,
    pub severity: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub body_site: Option<Vec<CodeableConcept>>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub onset: Option<ConditionOnset>,
    pub abatement: Option<ConditionAbatement>,
    pub recorded_date: Option<DateTime>,
    pub recorder: Option<Reference>,
    pub asserter: Option<Reference>,
    pub stage: Option<Vec<ConditionStage>>,
    pub evidence: Option<Vec<ConditionEvidence>>,
    pub note: Option<Vec<Annotation>>,
}

/// `Condition.onset[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ConditionOnset {
    DateTime(DateTime),
    Age(Age),
    Period(Period),
    Range(Range),
    String(String),
}

/// `Condition.abatement[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ConditionAbatement {
    DateTime(DateTime),
    Age(Age),
    Period(Period),
    Range(Range),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConditionStage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub summary: Option<CodeableConcept>,
    pub assessment: Option<Vec<Reference>>,
    pub r#type: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConditionEvidence {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<Vec<CodeableConcept>>,
    pub detail: Option<Vec<Reference>>,
}
