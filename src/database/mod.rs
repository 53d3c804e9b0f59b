pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod record;
pub mod store;

use std::sync::Arc;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::InMemoryPrescriptionStore;
pub use postgres::PgPrescriptionStore;
pub use record::RecordError;
pub use store::PrescriptionStore;

use crate::config::DatabaseConfig;

/// Select the store backend: PostgreSQL when a URL is configured, otherwise the
/// process-local collection.
pub async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn PrescriptionStore>, DatabaseError> {
    match config.url {
        Some(_) => {
            let db = DatabaseManager::connect(config).await?;
            db.migrate().await?;
            Ok(Arc::new(PgPrescriptionStore::new(db)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; prescriptions are kept in memory and lost on exit");
            Ok(Arc::new(InMemoryPrescriptionStore::new()))
        }
    }
}
