use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::database::models::Prescription;
use crate::database::record::{parse_new, parse_patch, unwrap_envelope};
use crate::database::store::PrescriptionStore;
use crate::services::ownership::{handle_404, require_ownership};
use crate::services::ServiceError;

/// Prescription use-cases. Every operation runs the same pipeline:
/// fetch, 404-normalize, ownership guard, then read or write.
#[derive(Clone)]
pub struct PrescriptionService {
    store: Arc<dyn PrescriptionStore>,
}

impl PrescriptionService {
    pub fn new(store: Arc<dyn PrescriptionStore>) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Create a record owned by `caller` from a `{ "prescription": {...} }` body.
    pub async fn create(&self, caller: Uuid, body: Value) -> Result<Prescription, ServiceError> {
        let fields = unwrap_envelope(body)?;
        let new = parse_new(fields, caller)?;

        let created = self.store.insert(new).await?;
        require_ownership(caller, &created)?;

        tracing::info!("Created prescription {} for user {}", created.id, caller);
        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<Prescription>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn list_mine(&self, caller: Uuid) -> Result<Vec<Prescription>, ServiceError> {
        Ok(self.store.find_by_owner(caller).await?)
    }

    pub async fn show(&self, id: &str) -> Result<Prescription, ServiceError> {
        self.fetch(id).await
    }

    /// Apply a partial update. Blank strings and any owner field are dropped
    /// before the merge.
    pub async fn update(&self, caller: Uuid, id: &str, body: Value) -> Result<(), ServiceError> {
        let existing = self.fetch(id).await?;
        require_ownership(caller, &existing)?;

        let fields = unwrap_envelope(body)?;
        let patch = parse_patch(fields)?;

        let updated = self.store.update(existing.id, &patch).await?;
        handle_404(updated, id)?;

        tracing::info!("Updated prescription {} for user {}", existing.id, caller);
        Ok(())
    }

    pub async fn delete(&self, caller: Uuid, id: &str) -> Result<(), ServiceError> {
        let existing = self.fetch(id).await?;
        require_ownership(caller, &existing)?;

        let removed = self.store.delete(existing.id).await?;
        handle_404(removed.then_some(()), id)?;

        tracing::info!("Deleted prescription {} for user {}", existing.id, caller);
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }

    /// Lookup by path id. An id that does not parse cannot name a stored record.
    async fn fetch(&self, id: &str) -> Result<Prescription, ServiceError> {
        let found = match Uuid::parse_str(id) {
            Ok(uuid) => self.store.find_by_id(uuid).await?,
            Err(_) => None,
        };
        handle_404(found, id)
    }
}
