pub mod ownership;
pub mod prescription_service;

use uuid::Uuid;

use crate::database::{DatabaseError, RecordError};

pub use ownership::{handle_404, require_ownership, Owned};
pub use prescription_service::PrescriptionService;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Prescription not found: {0}")]
    NotFound(String),
    #[error("User {caller} does not own prescription {record}")]
    NotOwner { caller: Uuid, record: Uuid },
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
