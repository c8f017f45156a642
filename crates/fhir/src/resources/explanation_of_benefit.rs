use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// A claim with its adjudication details and payment, as reported to the
/// patient.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct ExplanationOfBenefit {
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
    pub r#type: CodeableConcept,
    pub sub_type: Option<CodeableConcept>,
    pub use_: Code,
    pub patient: Reference,
    pub billable_period: Option<Period>,
    pub created: DateTime,
    pub enterer: Option<Reference>,
    pub insurer: Reference,
    pub provider: Reference,
    pub priority: Option<CodeableConcept>,
    pub referral: Option<Reference>,
    pub facility: Option<Reference>,
    pub claim: Option<Reference>,
    pub claim_response: Option<Reference>,
    pub outcome: Code,
    pub disposition: Option<String>,
    pub pre_auth_ref: Option<Vec<String>>,
    pub care_team: Option<Vec<ExplanationOfBenefitCareTeam>>,
    pub supporting_info: Option<Vec<ExplanationOfBenefitSupportingInfo>>,
    pub diagnosis: Option<Vec<ExplanationOfBenefitDiagnosis>>,
    pub procedure: Option<Vec<ExplanationOfBenefitProcedure>>,
    pub precedence: Option<PositiveInt>,
    pub insurance: Vec<ExplanationOfBenefitInsurance>,
    pub accident: Option<ExplanationOfBenefitAccident>,
    pub item: Option<Vec<ExplanationOfBenefitItem>>,
    pub total: Option<Vec<ExplanationOfBenefitTotal>>,
    pub payment: Option<ExplanationOfBenefitPayment>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitCareTeam {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub provider: Reference,
    pub responsible: Option<Boolean>,
    pub role: Option<CodeableConcept>,
    pub qualification: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitSupportingInfo {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub category: CodeableConcept,
    pub code: Option<CodeableConcept>,
    pub timing: Option<ExplanationOfBenefitSupportingInfoTiming>,
    pub value: Option<ExplanationOfBenefitSupportingInfoValue>,
    pub reason: Option<Coding>,
}

/// `ExplanationOfBenefit.supportingInfo.timing[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExplanationOfBenefitSupportingInfoTiming {
    Date(Date),
    Period(Period),
}

/// `ExplanationOfBenefit.supportingInfo.value[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExplanationOfBenefitSupportingInfoValue {
    Boolean(Boolean),
    String(String),
    Quantity(Quantity),
    Attachment(Attachment),
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitDiagnosis {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub diagnosis: ExplanationOfBenefitDiagnosisDiagnosis,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub on_admission: Option<CodeableConcept>,
    pub package_code: Option<CodeableConcept>,
}

/// `ExplanationOfBenefit.diagnosis.diagnosis[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExplanationOfBenefitDiagnosisDiagnosis {
    CodeableConcept(CodeableConcept),
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitProcedure {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub date: Option<DateTime>,
    pub procedure: ExplanationOfBenefitProcedureProcedure,
    pub udi: Option<Vec<Reference>>,
}

/// `ExplanationOfBenefit.procedure.procedure[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExplanationOfBenefitProcedureProcedure {
    CodeableConcept(CodeableConcept),
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitInsurance {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub focal: Boolean,
    pub coverage: Reference,
    pub pre_auth_ref: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ExplanationOfBenefitAccident {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub date: Option<Date>,
    pub r#type: Option<CodeableConcept>,
    pub location: Option<ExplanationOfBenefitAccidentLocation>,
}

/// `ExplanationOfBenefit.accident.location[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExplanationOfBenefitAccidentLocation {
    Address(Address),
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitItem {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: PositiveInt,
    pub care_team_sequence: Option<Vec<PositiveInt>>,
    pub diagnosis_sequence: Option<Vec<PositiveInt>>,
    pub procedure_sequence: Option<Vec<PositiveInt>>,
    pub information_sequence: Option<Vec<PositiveInt>>,
    pub revenue: Option<CodeableConcept>,
    pub category: Option<CodeableConcept>,
    pub product_or_service: CodeableConcept,
    pub modifier: Option<Vec<CodeableConcept>>,
    pub program_code: Option<Vec<CodeableConcept>>,
    pub serviced: Option<ExplanationOfBenefitItemServiced>,
    pub location: Option<ExplanationOfBenefitItemLocation>,
    pub quantity: Option<SimpleQuantity>,
    pub unit_price: Option<Money>,
    pub factor: Option<Decimal>,
    pub net: Option<Money>,
    pub body_site: Option<CodeableConcept>,
    pub sub_site: Option<Vec<CodeableConcept>>,
    pub encounter: Option<Vec<Reference>>,
    pub note_number: Option<Vec<PositiveInt>>,
    pub adjudication: Option<Vec<ExplanationOfBenefitItemAdjudication>>,
}

/// `ExplanationOfBenefit.item.serviced[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExplanationOfBenefitItemServiced {
    Date(Date),
    Period(Period),
}

/// `ExplanationOfBenefit.item.location[x]`.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub enum ExplanationOfBenefitItemLocation {
    CodeableConcept(CodeableConcept),
    Address(Address),
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitItemAdjudication {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: CodeableConcept,
    pub reason: Option<CodeableConcept>,
    pub amount: Option<Money>,
    pub value: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ExplanationOfBenefitTotal {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: CodeableConcept,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ExplanationOfBenefitPayment {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub adjustment: Option<Money>,
    pub adjustment_reason: Option<CodeableConcept>,
    pub date: Option<Date>,
    pub amount: Option<Money>,
    pub identifier: Option<Identifier>,
}
