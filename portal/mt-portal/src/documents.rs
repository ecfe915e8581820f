use crate::error::{PortalError, Result as PortalResult};

use mt_core::{DocumentType, VisitDocument};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

/// Split a `PATH` or `PATH=TYPE` argument.
pub fn parse_doc_arg(arg: &str) -> PortalResult<(PathBuf, DocumentType)> {
    match arg.rsplit_once('=') {
        Some((path, kind)) if !path.is_empty() => {
            Ok((PathBuf::from(path), DocumentType::from_str(kind.trim())?))
        }
        _ => Ok((PathBuf::from(arg), DocumentType::default())),
    }
}

/// Content type from the file extension; `None` lets the server sniff it.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let content_type = match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "dcm" => "application/dicom",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    };
    Some(content_type)
}

/// Read a document from disk for upload.
pub async fn load_document(
    path: &Path,
    document_type: DocumentType,
) -> PortalResult<VisitDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PortalError::read_file(path.to_path_buf(), e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(
        "Loaded {} ({} bytes) as {}",
        file_name,
        bytes.len(),
        document_type.as_str()
    );

    let mut document = VisitDocument::new(file_name, bytes).with_type(document_type);
    if let Some(content_type) = content_type_for(path) {
        document = document.with_content_type(content_type);
    }
    Ok(document)
}
