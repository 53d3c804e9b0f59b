use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPrescription, Prescription, PrescriptionPatch};
use crate::database::store::PrescriptionStore;

/// Process-local prescriptions collection. Records are kept in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryPrescriptionStore {
    records: Arc<RwLock<Vec<Prescription>>>,
}

impl InMemoryPrescriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PrescriptionStore for InMemoryPrescriptionStore {
    async fn insert(&self, new: NewPrescription) -> Result<Prescription, DatabaseError> {
        let record = Prescription::from_new(Uuid::new_v4(), new, Utc::now());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<Prescription>, DatabaseError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Prescription>, DatabaseError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.owner == owner).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prescription>, DatabaseError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &PrescriptionPatch,
    ) -> Result<Option<Prescription>, DatabaseError> {
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|r| r.id == id).map(|record| {
            patch.apply_to(record, Utc::now());
            record.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn close(&self) {}

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_for(owner: Uuid, name: &str) -> NewPrescription {
        NewPrescription {
            name: name.to_string(),
            description: "Take twice daily".to_string(),
            dr: "Dr. Smith".to_string(),
            owner,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let store = InMemoryPrescriptionStore::new();
        let owner = Uuid::new_v4();

        let a = store.insert(new_for(owner, "a")).await.unwrap();
        let b = store.insert(new_for(owner, "b")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.find_by_id(a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn find_by_owner_filters_and_keeps_order() {
        let store = InMemoryPrescriptionStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.insert(new_for(alice, "first")).await.unwrap();
        store.insert(new_for(bob, "other")).await.unwrap();
        store.insert(new_for(alice, "second")).await.unwrap();

        let names: Vec<_> = store
            .find_by_owner(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(store.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_records() {
        let store = InMemoryPrescriptionStore::new();
        let missing = Uuid::new_v4();

        assert_eq!(
            store.update(missing, &PrescriptionPatch::default()).await.unwrap(),
            None
        );
        assert!(!store.delete(missing).await.unwrap());
    }

    #[tokio::test]
    async fn update_merges_patch() {
        let store = InMemoryPrescriptionStore::new();
        let record = store.insert(new_for(Uuid::new_v4(), "a")).await.unwrap();

        let patch = PrescriptionPatch {
            dr: Some("Dr. Jones".to_string()),
            ..Default::default()
        };
        let updated = store.update(record.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.dr, "Dr. Jones");
        assert_eq!(updated.name, "a");
        assert!(updated.updated_at >= record.updated_at);
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let store = InMemoryPrescriptionStore::new();
        let owner = Uuid::new_v4();
        let a = store.insert(new_for(owner, "a")).await.unwrap();
        let b = store.insert(new_for(owner, "b")).await.unwrap();

        assert!(store.delete(a.id).await.unwrap());
        assert_eq!(store.find_by_id(a.id).await.unwrap(), None);
        assert_eq!(store.find_by_id(b.id).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn close_keeps_records() {
        let store = InMemoryPrescriptionStore::new();
        store.insert(new_for(Uuid::new_v4(), "a")).await.unwrap();

        store.close().await;

        assert_eq!(store.len().await, 1);
        assert!(store.ping().await.is_ok());
    }
}
