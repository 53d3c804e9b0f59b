use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{NewPrescription, Prescription, PrescriptionPatch};
use crate::database::store::PrescriptionStore;

const COLUMNS: &str = "id, name, description, dr, owner, created_at, updated_at";

/// PostgreSQL-backed prescriptions collection
pub struct PgPrescriptionStore {
    db: DatabaseManager,
}

impl PgPrescriptionStore {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrescriptionStore for PgPrescriptionStore {
    async fn insert(&self, new: NewPrescription) -> Result<Prescription, DatabaseError> {
        let sql = format!(
            "INSERT INTO prescriptions (name, description, dr, owner) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        let record = sqlx::query_as::<_, Prescription>(&sql)
            .bind(&new.name)
            .bind(&new.description)
            .bind(&new.dr)
            .bind(new.owner)
            .fetch_one(self.db.pool())
            .await?;

        tracing::debug!("Inserted prescription {} for owner {}", record.id, record.owner);
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<Prescription>, DatabaseError> {
        let sql = format!("SELECT {} FROM prescriptions ORDER BY created_at, id", COLUMNS);
        let records = sqlx::query_as::<_, Prescription>(&sql)
            .fetch_all(self.db.pool())
            .await?;
        Ok(records)
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Prescription>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM prescriptions WHERE owner = $1 ORDER BY created_at, id",
            COLUMNS
        );
        let records = sqlx::query_as::<_, Prescription>(&sql)
            .bind(owner)
            .fetch_all(self.db.pool())
            .await?;
        Ok(records)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prescription>, DatabaseError> {
        let sql = format!("SELECT {} FROM prescriptions WHERE id = $1", COLUMNS);
        let record = sqlx::query_as::<_, Prescription>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &PrescriptionPatch,
    ) -> Result<Option<Prescription>, DatabaseError> {
        // NULL parameters keep the stored column value
        let sql = format!(
            r#"UPDATE prescriptions SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                dr = COALESCE($4, dr),
                updated_at = now()
            WHERE id = $1
            RETURNING {}"#,
            COLUMNS
        );
        let record = sqlx::query_as::<_, Prescription>(&sql)
            .bind(id)
            .bind(patch.name.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.dr.as_deref())
            .fetch_optional(self.db.pool())
            .await?;
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM prescriptions WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.db.health_check().await
    }

    async fn close(&self) {
        self.db.close().await;
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
