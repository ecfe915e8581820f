use serde::{Deserialize, Serialize};

/// Backend-derived analysis attached to a visit. Display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitOutputs {
    #[serde(default)]
    pub ner_entities: Vec<NamedEntity>,
    #[serde(default)]
    pub imaging_findings: Vec<String>,
    #[serde(default)]
    pub referral_suggestions: Vec<String>,
}

impl VisitOutputs {
    pub fn is_empty(&self) -> bool {
        self.ner_entities.is_empty()
            && self.imaging_findings.is_empty()
            && self.referral_suggestions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub value: String,
}
