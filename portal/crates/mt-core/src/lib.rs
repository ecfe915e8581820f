pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::document_type::DocumentType;
pub use models::identity::{Identity, SessionToken};
pub use models::ingest::Ingest;
pub use models::intake::{IntakeForm, IntakeRecord, IntakeSubmission, Sightseeing, SightseeingPref};
pub use models::role::Role;
pub use models::user_record::UserRecord;
pub use models::verification::{VerificationForm, VerificationRequest};
pub use models::visa_status::VisaStatus;
pub use models::visit::Visit;
pub use models::visit_outputs::{NamedEntity, VisitOutputs};
pub use models::visit_request::{MAX_VISIT_FILES, VisitDocument, VisitRequest};
