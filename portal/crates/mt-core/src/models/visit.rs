use crate::models::{ingest::Ingest, visit_outputs::VisitOutputs};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub visit_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub visit_type: Option<String>,
    pub chief_complaint: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub human_review_completed: bool,
    #[serde(default)]
    pub ingests: Vec<Ingest>,
    #[serde(default)]
    pub outputs: VisitOutputs,
    #[serde(default)]
    pub visit_summary: Option<String>,
    #[serde(default)]
    pub doctor_notes: Option<String>,
    #[serde(default)]
    pub clinician_id: Option<String>,

    // Audit
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Visit {
    /// Status shown to the patient while the backend has not set one
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }
}
