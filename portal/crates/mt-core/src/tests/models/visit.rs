use crate::{DocumentType, Visit};

#[test]
fn given_backend_visit_json_when_deserialize_then_fields_mapped() {
    let json = r#"{
        "_id": "6650c0ffee",
        "visit_timestamp": "2025-01-05T09:00:00.000Z",
        "chief_complaint": "Chronic right knee pain",
        "status": "completed",
        "ingests": [{
            "_id": "i1",
            "ingest_id": "ING-001",
            "type": "imaging",
            "original_filename": "knee_xray.png",
            "upload_timestamp": "2025-01-05T09:10:00Z",
            "file_size": 154322
        }],
        "outputs": {
            "ner_entities": [{"type": "Condition", "value": "Osteoarthritis"}]
        },
        "createdAt": "2025-01-05T09:00:00Z",
        "updatedAt": "2025-01-05T09:00:00Z"
    }"#;

    let visit: Visit = serde_json::from_str(json).unwrap();

    assert_eq!(visit.id, "6650c0ffee");
    assert_eq!(visit.status_label(), "completed");
    assert_eq!(visit.ingests.len(), 1);
    assert_eq!(visit.ingests[0].document_type, DocumentType::Imaging);
    assert_eq!(visit.ingests[0].file_size, Some(154322));
    assert_eq!(visit.outputs.ner_entities[0].value, "Osteoarthritis");
    assert!(visit.outputs.imaging_findings.is_empty());
    assert!(visit.created_at.is_some());
}

#[test]
fn given_minimal_visit_when_deserialize_then_defaults() {
    let json = r#"{"_id": "v1", "chief_complaint": "Back pain"}"#;

    let visit: Visit = serde_json::from_str(json).unwrap();

    assert_eq!(visit.status_label(), "pending");
    assert!(visit.ingests.is_empty());
    assert!(visit.outputs.is_empty());
}
