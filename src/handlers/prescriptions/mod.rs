// handlers/prescriptions - /prescriptions routes (bearer token required)
//
// collection.rs: GET/POST /prescriptions, GET /prescriptions/mine
// record.rs:     GET/PATCH/DELETE /prescriptions/:id

pub mod collection;
pub mod record;

use serde::Serialize;

use crate::database::models::Prescription;

pub use collection::{create, list, mine};
pub use record::{delete, show, update};

/// `{ "prescription": {...} }`
#[derive(Debug, Serialize)]
pub struct PrescriptionBody {
    pub prescription: Prescription,
}

/// `{ "prescriptions": [...] }`
#[derive(Debug, Serialize)]
pub struct PrescriptionsBody {
    pub prescriptions: Vec<Prescription>,
}
