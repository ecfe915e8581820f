use crate::models::document_type::DocumentType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document uploaded as part of a visit, as tracked by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub ingest_id: String,
    #[serde(rename = "type", default)]
    pub document_type: DocumentType,
    pub original_filename: String,
    #[serde(default)]
    pub upload_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processing_status: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
}
