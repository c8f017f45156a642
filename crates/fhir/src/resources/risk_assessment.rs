use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// The likely outcomes for a subject, with their probabilities.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct RiskAssessment {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Reference>,
    pub parent: Option<Reference>,
    pub status: Code,
    pub method: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub occurrence: Option<RiskAssessmentOccurrence>,
    pub condition: Option<Reference>,
    pub performer: Option<Reference>,
    pub reason_code: Option<Vec<CodeableConcept>>,
    pub reason_reference: Option<Vec<Reference>>,
    pub basis: Option<Vec<Reference>>,
    pub prediction: Option<Vec<RiskAssessmentPrediction>>,
    pub mitigation: Option<String>,
    pub note: Option<Vec<Annotation>>,
}

/// `RiskAssessment.occurrence[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum RiskAssessmentOccurrence {
    DateTime(DateTime),
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct RiskAssessmentPrediction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub outcome: Option<CodeableConcept>,
    pub probability: Option<RiskAssessmentPredictionProbability>,
    pub qualitative_risk: Option<CodeableConcept>,
    pub relative_risk: Option<Decimal>,
    pub when: Option<RiskAssessmentPredictionWhen>,
    pub rationale: Option<String>,
}

/// `RiskAssessment.prediction.probability[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum RiskAssessmentPredictionProbability {
    Decimal(Decimal),
    Range(Range),
}

/// `RiskAssessment.prediction.when[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum RiskAssessmentPredictionWhen {
    Period(Period),
    Range(Range),
}
