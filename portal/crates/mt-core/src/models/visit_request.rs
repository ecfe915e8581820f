use crate::models::document_type::DocumentType;
use crate::{CoreError, Result as CoreErrorResult};

use std::collections::BTreeMap;

/// Maximum number of documents per visit request, matching the backend limit
pub const MAX_VISIT_FILES: usize = 5;
pub const MAX_CHIEF_COMPLAINT_LENGTH: usize = 5000;

/// A file staged for upload with a visit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    pub document_type: DocumentType,
}

impl VisitDocument {
    /// New document with the default type; the user picks the real one later.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
            document_type: DocumentType::default(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }
}

/// "Request a visit" form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitRequest {
    pub chief_complaint: String,
    documents: Vec<VisitDocument>,
}

impl VisitRequest {
    pub fn new(chief_complaint: impl Into<String>) -> Self {
        Self {
            chief_complaint: chief_complaint.into(),
            documents: Vec::new(),
        }
    }

    pub fn documents(&self) -> &[VisitDocument] {
        &self.documents
    }

    /// Stage a batch of files.
    ///
    /// All-or-nothing: if the batch would exceed `MAX_VISIT_FILES` nothing
    /// is added and the staged files are unchanged.
    #[track_caller]
    pub fn add_documents(&mut self, documents: Vec<VisitDocument>) -> CoreErrorResult<()> {
        if self.documents.len() + documents.len() > MAX_VISIT_FILES {
            return Err(CoreError::too_many_files(MAX_VISIT_FILES));
        }
        self.documents.extend(documents);
        Ok(())
    }

    #[track_caller]
    pub fn set_document_type(
        &mut self,
        index: usize,
        document_type: DocumentType,
    ) -> CoreErrorResult<()> {
        let document = self.documents.get_mut(index).ok_or_else(|| {
            CoreError::validation("medicalDocs", format!("No staged file at position {index}"))
        })?;
        document.document_type = document_type;
        Ok(())
    }

    pub fn remove_document(&mut self, index: usize) -> Option<VisitDocument> {
        (index < self.documents.len()).then(|| self.documents.remove(index))
    }

    /// Filename to document type, sent alongside the files.
    pub fn document_type_map(&self) -> BTreeMap<String, DocumentType> {
        self.documents
            .iter()
            .map(|d| (d.file_name.clone(), d.document_type))
            .collect()
    }

    pub fn validate(&self) -> CoreErrorResult<()> {
        let complaint = self.chief_complaint.trim();
        if complaint.is_empty() {
            return Err(CoreError::validation(
                "chief_complaint",
                "Please enter the chief complaint.",
            ));
        }
        if complaint.chars().count() > MAX_CHIEF_COMPLAINT_LENGTH {
            return Err(CoreError::validation(
                "chief_complaint",
                format!("Chief complaint must be at most {MAX_CHIEF_COMPLAINT_LENGTH} characters"),
            ));
        }
        if self.documents.len() > MAX_VISIT_FILES {
            return Err(CoreError::too_many_files(MAX_VISIT_FILES));
        }
        Ok(())
    }
}
