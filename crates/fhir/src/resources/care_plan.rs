use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// The intended care for a patient or group over a period.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct CarePlan {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub instantiates_canonical: Option<Vec<Canonical>>,
    pub instantiates_uri: Option<Vec<Uri>>,
    pub based_on: Option<Vec<Reference>>,
    pub replaces: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Code,
    pub intent: Code,
    pub category: Option<Vec<CodeableConcept>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub period: Option<Period>,
    pub created: Option<DateTime>,
    pub author: Option<Reference>,
    pub contributor: Option<Vec<Reference>>,
    pub care_team: Option<Vec<Reference>>,
    pub addresses: Option<Vec<Reference>>,
    pub supporting_info: Option<Vec<Reference>>,
    pub goal: Option<Vec<Reference>>,
    pub activity: Option<Vec<CarePlanActivity>>,
    pub note: Option<Vec<Annotation>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CarePlanActivity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub outcome_codeable_concept: Option<Vec<CodeableConcept>>,
    pub outcome_reference: Option<Vec<Reference>>,
    pub progress: Option<Vec<Annotation>>,
    pub reference: Option<Reference>,
    pub detail: Option<CarePlanActivityDetail>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CarePlanActivityDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub kind: Option<Code>,
    pub instantiates_canonical: Option<Vec<Canonical>>,
    pub instantiates_uri: Option<Vec<Uri>>,
    pub code: Option<CodeableConcept>,
    pub reason_code: Option<Vec<CodeableConcept>>,
    pub reason_reference: Option<Vec<Reference>>,
    pub goal: Option<Vec<Reference>>,
    pub status: Code,
    pub status_reason: Option<CodeableConcept>,
    pub do_not_perform: Option<Boolean>,
    pub scheduled: Option<CarePlanActivityDetailScheduled>,
    pub location: Option<Reference>,
    pub performer: Option<Vec<Reference>>,
    pub product: Option<CarePlanActivityDetailProduct>,
    pub daily_amount: Option<SimpleQuantity>,
    pub quantity: Option<SimpleQuantity>,
    pub description: Option<String>,
}

/// `CarePlan.activity.detail.scheduled[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum CarePlanActivityDetailScheduled {
    Timing(Timing),
    Period(Period),
    String(String),
}

/// `CarePlan.activity.detail.product[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum CarePlanActivityDetailProduct {
    CodeableConcept(CodeableConcept),
    Reference(Reference),
}
