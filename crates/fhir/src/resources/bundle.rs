use crate::datatypes::*;
use crate::primitives::*;
use crate::{FhirSerde, Resource};

/// A container for a collection of resources.
///
/// Bundle is not a domain resource, so it has no narrative, contained
/// resources or extensions of its own.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(resource)]
pub struct Bundle {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub identifier: Option<Identifier>,
    pub r#type: Code,
    pub timestamp: Option<Instant>,
    pub total: Option<UnsignedInt>,
    pub link: Option<Vec<BundleLink>>,
    pub entry: Option<Vec<BundleEntry>>,
}

impl Bundle {
    /// The resources carried by the entries, in order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entry
            .iter()
            .flatten()
            .filter_map(|entry| entry.resource.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct BundleLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub relation: String,
    pub url: Uri,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntry {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link: Option<Vec<BundleLink>>,
    pub full_url: Option<Uri>,
    pub resource: Option<Resource>,
    pub search: Option<BundleEntrySearch>,
    pub request: Option<BundleEntryRequest>,
    pub response: Option<BundleEntryResponse>,
}

#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntrySearch {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: Option<Code>,
    pub score: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct BundleEntryRequest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub method: Code,
    pub url: Uri,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<Instant>,
    pub if_match: Option<String>,
    pub if_none_exist: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct BundleEntryResponse {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub status: String,
    pub location: Option<Uri>,
    pub etag: Option<String>,
    pub last_modified: Option<Instant>,
    pub outcome: Option<Resource>,
}
