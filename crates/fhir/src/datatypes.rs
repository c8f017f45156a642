//! General-purpose FHIR datatypes and their choice elements.

use crate::FhirSerde;
use crate::primitives::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, Decimal, Id, Instant, Integer,
    Markdown, Oid, PositiveInt, String, Time, UnsignedInt, Uri, Url, Uuid,
};

/// Additional content defined by an implementation or profile.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Extension {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub url: std::string::String,
    pub value: Option<ExtensionValue>,
}

impl Extension {
    pub fn new(url: impl Into<std::string::String>) -> Self {
        Extension {
            id: None,
            extension: None,
            url: url.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<ExtensionValue>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// `Extension.value[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExtensionValue {
    Base64Binary(Base64Binary),
    Boolean(Boolean),
    Canonical(Canonical),
    Code(Code),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Id(Id),
    Instant(Instant),
    Integer(Integer),
    Markdown(Markdown),
    Oid(Oid),
    PositiveInt(PositiveInt),
    String(String),
    Time(Time),
    UnsignedInt(UnsignedInt),
    Uri(Uri),
    Url(Url),
    Uuid(Uuid),
    Address(Address),
    Age(Age),
    Annotation(Annotation),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    ContactPoint(ContactPoint),
    Count(Count),
    Distance(Distance),
    Duration(Duration),
    HumanName(HumanName),
    Identifier(Identifier),
    Money(Money),
    Period(Period),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    Reference(Reference),
    Timing(Timing),
}

impl From<CodeableConcept> for ExtensionValue {
    fn from(value: CodeableConcept) -> Self {
        ExtensionValue::CodeableConcept(value)
    }
}

impl From<Coding> for ExtensionValue {
    fn from(value: Coding) -> Self {
        ExtensionValue::Coding(value)
    }
}

impl From<Quantity> for ExtensionValue {
    fn from(value: Quantity) -> Self {
        ExtensionValue::Quantity(value)
    }
}

impl From<Reference> for ExtensionValue {
    fn from(value: Reference) -> Self {
        ExtensionValue::Reference(value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Coding {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub system: Option<Uri>,
    pub version: Option<String>,
    pub code: Option<Code>,
    pub display: Option<String>,
    pub user_selected: Option<Boolean>,
}

impl Coding {
    pub fn new(system: &str, code: &str) -> Self {
        Coding {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CodeableConcept {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub coding: Option<Vec<Coding>>,
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn from_coding(coding: Coding) -> Self {
        CodeableConcept {
            coding: Some(vec![coding]),
            ..Default::default()
        }
    }

    pub fn from_text(text: &str) -> Self {
        CodeableConcept {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Quantity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub value: Option<Decimal>,
    pub comparator: Option<Code>,
    pub unit: Option<String>,
    pub system: Option<Uri>,
    pub code: Option<Code>,
}

// Profiles of Quantity share its wire shape.
pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Money {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub value: Option<Decimal>,
    pub currency: Option<Code>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Range {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub low: Option<SimpleQuantity>,
    pub high: Option<SimpleQuantity>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Ratio {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Period {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Reference {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub reference: Option<String>,
    pub r#type: Option<Uri>,
    pub identifier: Option<Identifier>,
    pub display: Option<String>,
}

impl Reference {
    /// A literal reference such as `Patient/example`.
    pub fn to(reference: &str) -> Self {
        Reference {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Identifier {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub use_: Option<Code>,
    pub r#type: Option<CodeableConcept>,
    pub system: Option<Uri>,
    pub value: Option<String>,
    pub period: Option<Period>,
    pub assigner: Option<Box<Reference>>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Annotation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub author: Option<AnnotationAuthor>,
    pub time: Option<DateTime>,
    pub text: Markdown,
}

/// `Annotation.author[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum AnnotationAuthor {
    Reference(Reference),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Attachment {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub content_type: Option<Code>,
    pub language: Option<Code>,
    pub data: Option<Base64Binary>,
    pub url: Option<Url>,
    pub size: Option<UnsignedInt>,
    pub hash: Option<Base64Binary>,
    pub title: Option<String>,
    pub creation: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct HumanName {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub use_: Option<Code>,
    pub text: Option<String>,
    pub family: Option<String>,
    pub given: Option<Vec<String>>,
    pub prefix: Option<Vec<String>>,
    pub suffix: Option<Vec<String>>,
    pub period: Option<Period>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ContactPoint {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub system: Option<Code>,
    pub value: Option<String>,
    pub use_: Option<Code>,
    pub rank: Option<PositiveInt>,
    pub period: Option<Period>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Address {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub use_: Option<Code>,
    pub r#type: Option<Code>,
    pub text: Option<String>,
    pub line: Option<Vec<String>>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub period: Option<Period>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Meta {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub version_id: Option<Id>,
    pub last_updated: Option<Instant>,
    pub source: Option<Uri>,
    pub profile: Option<Vec<Canonical>>,
    pub security: Option<Vec<Coding>>,
    pub tag: Option<Vec<Coding>>,
}

/// Human-readable summary. `div` is XHTML and is carried as opaque text.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct Narrative {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub status: Code,
    pub div: std::string::String,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Timing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub event: Option<Vec<DateTime>>,
    pub repeat: Option<TimingRepeat>,
    pub code: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct TimingRepeat {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub bounds: Option<TimingRepeatBounds>,
    pub count: Option<PositiveInt>,
    pub count_max: Option<PositiveInt>,
    pub duration: Option<Decimal>,
    pub duration_max: Option<Decimal>,
    pub duration_unit: Option<Code>,
    pub frequency: Option<PositiveInt>,
    pub frequency_max: Option<PositiveInt>,
    pub period: Option<Decimal>,
    pub period_max: Option<Decimal>,
    pub period_unit: Option<Code>,
    pub day_of_week: Option<Vec<Code>>,
    pub time_of_day: Option<Vec<Time>>,
    pub when: Option<Vec<Code>>,
    pub offset: Option<UnsignedInt>,
}

/// `Timing.repeat.bounds[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum TimingRepeatBounds {
    Duration(Duration),
    Range(Range),
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Dosage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: Option<Integer>,
    pub text: Option<String>,
    pub additional_instruction: Option<Vec<CodeableConcept>>,
    pub patient_instruction: Option<String>,
    pub timing: Option<Timing>,
    pub as_needed: Option<DosageAsNeeded>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub dose_and_rate: Option<Vec<DosageDoseAndRate>>,
    pub max_dose_per_period: Option<Ratio>,
    pub max_dose_per_administration: Option<SimpleQuantity>,
    pub max_dose_per_lifetime: Option<SimpleQuantity>,
}

/// `Dosage.asNeeded[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageAsNeeded {
    Boolean(Boolean),
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct DosageDoseAndRate {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub dose: Option<DosageDoseAndRateDose>,
    pub rate: Option<DosageDoseAndRateRate>,
}

/// `Dosage.doseAndRate.dose[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageDoseAndRateDose {
    Range(Range),
    Quantity(SimpleQuantity),
}

/// `Dosage.doseAndRate.rate[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum DosageDoseAndRateRate {
    Ratio(Ratio),
    Range(Range),
    Quantity(SimpleQuantity),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reserved_words_use_plain_wire_names() {
        let identifier = Identifier {
            use_: Some("official".into()),
            r#type: Some(CodeableConcept::from_text("MRN")),
            value: Some("12345".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&identifier).unwrap(),
            json!({"use": "official", "type": {"text": "MRN"}, "value": "12345"})
        );
    }

    #[test]
    fn boxed_assigner_round_trips() {
        let input = json!({
            "value": "A-1",
            "assigner": {"display": "Acme", "identifier": {"value": "org-1"}}
        });
        let identifier: Identifier = serde_json::from_value(input.clone()).unwrap();
        let assigner = identifier.assigner.as_deref().unwrap();
        assert_eq!(assigner.display, Some("Acme".into()));
        assert_eq!(serde_json::to_value(&identifier).unwrap(), input);
    }

    #[test]
    fn nested_extensions() {
        let input = json!({
            "url": "http://example.org/outer",
            "extension": [
                {"url": "inner", "valueCoding": {"system": "http://loinc.org", "code": "1234-5"}}
            ]
        });
        let extension: Extension = serde_json::from_value(input.clone()).unwrap();
        let inner = &extension.extension.as_ref().unwrap()[0];
        assert_eq!(
            inner.value,
            Some(ExtensionValue::Coding(Coding::new("http://loinc.org", "1234-5")))
        );
        assert_eq!(serde_json::to_value(&extension).unwrap(), input);
    }

    #[test]
    fn narrative_requires_status_and_div() {
        let err = serde_json::from_value::<Narrative>(json!({"status": "generated"})).unwrap_err();
        assert!(err.to_string().contains("div"));
    }
}
