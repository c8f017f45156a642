use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// Measurements and simple assertions made about a patient or subject.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct Observation {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Code,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: CodeableConcept,
    pub subject: Option<Reference>,
    pub focus: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    pub effective: Option<ObservationEffective>,
    pub issued: Option<Instant>,
    pub performer: Option<Vec<Reference>>,
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub body_site: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub specimen: Option<Reference>,
    pub device: Option<Reference>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    pub has_member: Option<Vec<Reference>>,
    pub derived_from: Option<Vec<Reference>>,
    pub component: Option<Vec<ObservationComponent>>,
}

impl Observation {
    pub fn new(status: &str, code: CodeableConcept) -> Self {
        Observation {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            identifier: None,
            based_on: None,
            part_of: None,
            status: status.into(),
            category: None,
            code,
            subject: None,
            focus: None,
            encounter: None,
            effective: None,
            issued: None,
            performer: None,
            value: None,
            data_absent_reason: None,
            interpretation: None,
            note: None,
            body_site: None,
            method: None,
            specimen: None,
            device: None,
            reference_range: None,
            has_member: None,
            derived_from: None,
            component: None,
        }
    }
}

/// `Observation.effective[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ObservationEffective {
    DateTime(DateTime),
    Period(Period),
    Timing(Timing),
    Instant(Instant),
}

/// `Observation.value[x]`, also used by `Observation.component.value[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ObservationValue {
    Quantity(Quantity),
    CodeableConcept(CodeableConcept),
    String(String),
    Boolean(Boolean),
    Integer(Integer),
    Range(Range),
    Ratio(Ratio),
    Time(Time),
    DateTime(DateTime),
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ObservationReferenceRange {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub low: Option<SimpleQuantity>,
    pub high: Option<SimpleQuantity>,
    pub r#type: Option<CodeableConcept>,
    pub applies_to: Option<Vec<CodeableConcept>>,
    pub age: Option<Range>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ObservationComponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
}
