use crate::{CoreError, DocumentType, MAX_VISIT_FILES, VisitDocument, VisitRequest};

fn doc(name: &str) -> VisitDocument {
    VisitDocument::new(name, b"%PDF-1.4".to_vec())
}

#[test]
fn given_five_staged_files_when_adding_sixth_then_rejected_and_unchanged() {
    let mut request = VisitRequest::new("Knee pain");
    request
        .add_documents((0..MAX_VISIT_FILES).map(|i| doc(&format!("f{i}.pdf"))).collect())
        .unwrap();

    let err = request.add_documents(vec![doc("sixth.pdf")]).unwrap_err();

    assert!(matches!(err, CoreError::TooManyFiles { max: 5, .. }));
    assert_eq!(err.inline_message(), "You can upload a maximum of 5 files.");
    assert_eq!(request.documents().len(), MAX_VISIT_FILES);
}

#[test]
fn given_batch_overflowing_limit_when_adding_then_none_added() {
    let mut request = VisitRequest::new("Knee pain");
    request.add_documents(vec![doc("a.pdf"), doc("b.pdf")]).unwrap();

    let batch = (0..4).map(|i| doc(&format!("x{i}.pdf"))).collect();
    assert!(request.add_documents(batch).is_err());
    assert_eq!(request.documents().len(), 2);
}

#[test]
fn test_new_document_defaults_to_clinical_notes() {
    assert_eq!(doc("a.pdf").document_type, DocumentType::ClinicalNotes);
}

#[test]
fn test_document_type_map_keyed_by_filename() {
    let mut request = VisitRequest::new("Knee pain");
    request
        .add_documents(vec![doc("xray.png"), doc("labs.pdf")])
        .unwrap();
    request.set_document_type(0, DocumentType::Imaging).unwrap();
    request.set_document_type(1, DocumentType::LabReport).unwrap();

    let map = request.document_type_map();
    assert_eq!(map.get("xray.png"), Some(&DocumentType::Imaging));
    assert_eq!(map.get("labs.pdf"), Some(&DocumentType::LabReport));

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"labs.pdf":"lab_report","xray.png":"imaging"}"#);
}

#[test]
fn test_set_document_type_out_of_range_errors() {
    let mut request = VisitRequest::new("Knee pain");
    assert!(request.set_document_type(0, DocumentType::Imaging).is_err());
}

#[test]
fn test_remove_document() {
    let mut request = VisitRequest::new("Knee pain");
    request.add_documents(vec![doc("a.pdf"), doc("b.pdf")]).unwrap();

    let removed = request.remove_document(0).unwrap();
    assert_eq!(removed.file_name, "a.pdf");
    assert_eq!(request.documents().len(), 1);
    assert!(request.remove_document(5).is_none());
}

#[test]
fn given_blank_complaint_when_validate_then_error() {
    let request = VisitRequest::new("   ");
    let err = request.validate().unwrap_err();
    assert_eq!(err.field(), Some("chief_complaint"));
}

#[test]
fn given_complaint_and_no_files_when_validate_then_ok() {
    assert!(VisitRequest::new("Knee pain").validate().is_ok());
}
