use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored prescription. Serialized with the document-store field names
/// (`_id`, `createdAt`, `updatedAt`) that API clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Prescriber.
    pub dr: String,
    /// Id of the user in the external user collection.
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for a new record. `owner` always comes from the caller's token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrescription {
    pub name: String,
    pub description: String,
    pub dr: String,
    pub owner: Uuid,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriptionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dr: Option<String>,
}

impl PrescriptionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.dr.is_none()
    }

    /// Merge the present fields into `record` and bump `updated_at`.
    pub fn apply_to(&self, record: &mut Prescription, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(dr) = &self.dr {
            record.dr = dr.clone();
        }
        record.updated_at = now;
    }
}

impl Prescription {
    pub fn from_new(id: Uuid, new: NewPrescription, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            dr: new.dr,
            owner: new.owner,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> Prescription {
        Prescription::from_new(
            Uuid::new_v4(),
            NewPrescription {
                name: "Amoxicillin".to_string(),
                description: "Take twice daily".to_string(),
                dr: "Dr. Smith".to_string(),
                owner: Uuid::new_v4(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn serializes_with_document_field_names() {
        let record = sample();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["_id"], serde_json::json!(record.id));
        assert_eq!(json["dr"], "Dr. Smith");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut record = sample();
        let before = record.clone();
        let later = before.updated_at + Duration::seconds(5);

        let patch = PrescriptionPatch {
            description: Some("Once a day".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut record, later);

        assert_eq!(record.name, before.name);
        assert_eq!(record.dr, before.dr);
        assert_eq!(record.description, "Once a day");
        assert_eq!(record.owner, before.owner);
        assert_eq!(record.created_at, before.created_at);
        assert_eq!(record.updated_at, later);
    }

    #[test]
    fn empty_patch() {
        assert!(PrescriptionPatch::default().is_empty());
        assert!(!PrescriptionPatch {
            dr: Some("Dr. Who".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
