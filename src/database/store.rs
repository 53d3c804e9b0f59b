use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPrescription, Prescription, PrescriptionPatch};

/// Persistence port for the prescriptions collection.
///
/// Adapters assign the record id and both timestamps. Listing returns records
/// oldest first. `update` and `delete` report a missing record as `None`/`false`
/// rather than an error so the caller decides how to surface it.
#[async_trait]
pub trait PrescriptionStore: Send + Sync {
    async fn insert(&self, new: NewPrescription) -> Result<Prescription, DatabaseError>;

    async fn find_all(&self) -> Result<Vec<Prescription>, DatabaseError>;

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Prescription>, DatabaseError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prescription>, DatabaseError>;

    async fn update(
        &self,
        id: Uuid,
        patch: &PrescriptionPatch,
    ) -> Result<Option<Prescription>, DatabaseError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError>;

    async fn ping(&self) -> Result<(), DatabaseError>;

    /// Release backend resources once the server has stopped taking requests.
    async fn close(&self);

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
