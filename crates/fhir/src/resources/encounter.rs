use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// An interaction between a patient and healthcare providers.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct Encounter {
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
    pub status_history: Option<Vec<EncounterStatusHistory>>,
    pub class: Coding,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub service_type: Option<CodeableConcept>,
    pub priority: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub episode_of_care: Option<Vec<Reference>>,
    pub based_on: Option<Vec<Reference>>,
    pub participant: Option<Vec<EncounterParticipant>>,
    pub appointment: Option<Vec<Reference>>,
    pub period: Option<Period>,
    pub length: Option<Duration>,
    pub reason_code: Option<Vec<CodeableConcept>>,
    pub reason_reference: Option<Vec<Reference>>,
    pub diagnosis: Option<Vec<EncounterDiagnosis>>,
    pub hospitalization: Option<EncounterHospitalization>,
    pub location: Option<Vec<EncounterLocation>>,
    pub service_provider: Option<Reference>,
    pub part_of: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct EncounterStatusHistory {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub status: Code,
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub period: Option<Period>,
    pub individual: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct EncounterDiagnosis {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub condition: Reference,
    pub use_: Option<CodeableConcept>,
    pub rank: Option<PositiveInt>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct EncounterHospitalization {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub pre_admission_identifier: Option<Identifier>,
    pub origin: Option<Reference>,
    pub admit_source: Option<CodeableConcept>,
    pub re_admission: Option<CodeableConcept>,
    pub diet_preference: Option<Vec<CodeableConcept>>,
    pub special_courtesy: Option<Vec<CodeableConcept>>,
    pub special_arrangement: Option<Vec<CodeableConcept>>,
    pub destination: Option<Reference>,
    pub discharge_disposition: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct EncounterLocation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub location: Reference,
    pub status: Option<Code>,
    pub physical_type: Option<CodeableConcept>,
    pub period: Option<Period>,
}
