pub mod document_type;
pub mod identity;
pub mod ingest;
pub mod intake;
pub mod role;
pub mod user_record;
pub mod verification;
pub mod visa_status;
pub mod visit;
pub mod visit_outputs;
pub mod visit_request;
