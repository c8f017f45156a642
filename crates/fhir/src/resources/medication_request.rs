use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// An order or request for the supply and administration of a medication.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct MedicationRequest {
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
    pub intent: Code,
    pub category: Option<Vec<CodeableConcept>>,
    pub priority: Option<Code>,
    pub do_not_perform: Option<Boolean>,
    pub reported: Option<MedicationRequestReported>,
    pub medication: MedicationRequestMedication,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub supporting_information: Option<Vec<Reference>>,
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub performer: Option<Reference>,
    pub performer_type: Option<CodeableConcept>,
    pub recorder: Option<Reference>,
    pub reason_code: Option<Vec<CodeableConcept>>,
    pub reason_reference: Option<Vec<Reference>>,
    pub instantiates_canonical: Option<Vec<Canonical>>,
    pub instantiates_uri: Option<Vec<Uri>>,
    pub based_on: Option<Vec<Reference>>,
    pub group_identifier: Option<Identifier>,
    pub course_of_therapy_type: Option<CodeableConcept>,
    pub insurance: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub dosage_instruction: Option<Vec<Dosage>>,
    pub dispense_request: Option<MedicationRequestDispenseRequest>,
    pub substitution: Option<MedicationRequestSubstitution>,
    pub prior_prescription: Option<Reference>,
    pub detected_issue: Option<Vec<Reference>>,
    pub event_history: Option<Vec<Reference>>,
}

/// `MedicationRequest.reported[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum MedicationRequestReported {
    Boolean(Boolean),
    Reference(Reference),
}

/// `MedicationRequest.medication[x]`, which is required.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum MedicationRequestMedication {
    CodeableConcept(CodeableConcept),
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationRequestDispenseRequest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub initial_fill: Option<MedicationRequestDispenseRequestInitialFill>,
    pub dispense_interval: Option<Duration>,
    pub validity_period: Option<Period>,
    pub number_of_repeats_allowed: Option<UnsignedInt>,
    pub quantity: Option<SimpleQuantity>,
    pub expected_supply_duration: Option<Duration>,
    pub performer: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationRequestDispenseRequestInitialFill {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub quantity: Option<SimpleQuantity>,
    pub duration: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct MedicationRequestSubstitution {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub allowed: MedicationRequestSubstitutionAllowed,
    pub reason: Option<CodeableConcept>,
}

/// `MedicationRequest.substitution.allowed[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum MedicationRequestSubstitutionAllowed {
    Boolean(Boolean),
    CodeableConcept(CodeableConcept),
}
