//! Payload parsing for prescription writes.
//!
//! Request bodies arrive as `{ "prescription": { ... } }`. These helpers unwrap
//! the envelope, drop fields the server owns, and turn what is left into typed
//! create/update inputs with per-field validation messages.

use serde_json::{Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::models::{NewPrescription, PrescriptionPatch};

/// Envelope key wrapping a single prescription in request and response bodies
pub const ENVELOPE_KEY: &str = "prescription";

/// Client-writable fields
pub const WRITABLE_FIELDS: [&str; 3] = ["name", "description", "dr"];

/// Fields that are assigned by the server and never taken from input
const SYSTEM_FIELDS: &[&str] = &[
    "_id",
    "id",
    "owner",
    "createdAt",
    "updatedAt",
    "created_at",
    "updated_at",
    "__v",
];

/// Errors that can occur while reading a prescription payload
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("Request body must contain a '{0}' object")]
    MissingEnvelope(&'static str),
    #[error("Prescription validation failed")]
    Invalid { field_errors: HashMap<String, String> },
}

impl RecordError {
    fn invalid(field_errors: HashMap<String, String>) -> Self {
        RecordError::Invalid { field_errors }
    }
}

/// Take the `prescription` object out of a request body.
pub fn unwrap_envelope(body: Value) -> Result<Map<String, Value>, RecordError> {
    match body {
        Value::Object(mut outer) => match outer.remove(ENVELOPE_KEY) {
            Some(Value::Object(inner)) => Ok(inner),
            _ => Err(RecordError::MissingEnvelope(ENVELOPE_KEY)),
        },
        _ => Err(RecordError::MissingEnvelope(ENVELOPE_KEY)),
    }
}

/// Remove `owner`, identifiers and timestamps from client input.
pub fn strip_system_fields(fields: &mut Map<String, Value>) {
    for key in SYSTEM_FIELDS {
        if fields.remove(*key).is_some() {
            tracing::debug!("Ignoring server-assigned field '{}' in payload", key);
        }
    }
}

/// Remove every field whose value is an empty string so that blanks never
/// overwrite stored data.
pub fn strip_blank_fields(fields: &mut Map<String, Value>) {
    fields.retain(|_, value| !matches!(value, Value::String(s) if s.is_empty()));
}

/// Build a create input. Any client-supplied owner is discarded in favour of `owner`.
pub fn parse_new(mut fields: Map<String, Value>, owner: Uuid) -> Result<NewPrescription, RecordError> {
    strip_system_fields(&mut fields);

    let mut errors = HashMap::new();
    let mut values = HashMap::new();
    for field in WRITABLE_FIELDS {
        match fields.get(field) {
            Some(Value::String(s)) if !s.is_empty() => {
                values.insert(field, s.clone());
            }
            Some(Value::String(_)) | Some(Value::Null) | None => {
                errors.insert(field.to_string(), "This field is required".to_string());
            }
            Some(_) => {
                errors.insert(field.to_string(), "Must be a string".to_string());
            }
        }
    }

    if !errors.is_empty() {
        return Err(RecordError::invalid(errors));
    }

    let mut take = |field: &str| values.remove(field).unwrap_or_default();
    Ok(NewPrescription {
        name: take("name"),
        description: take("description"),
        dr: take("dr"),
        owner,
    })
}

/// Build a partial update: server fields and blank strings are dropped first,
/// unknown fields are ignored, and remaining writable fields must be strings.
pub fn parse_patch(mut fields: Map<String, Value>) -> Result<PrescriptionPatch, RecordError> {
    strip_system_fields(&mut fields);
    strip_blank_fields(&mut fields);

    let mut errors = HashMap::new();
    let mut read = |field: &str| match fields.get(field) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) => {
            errors.insert(field.to_string(), "This field is required".to_string());
            None
        }
        Some(_) => {
            errors.insert(field.to_string(), "Must be a string".to_string());
            None
        }
    };

    let patch = PrescriptionPatch {
        name: read("name"),
        description: read("description"),
        dr: read("dr"),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(RecordError::invalid(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn unwraps_prescription_envelope() {
        let inner = unwrap_envelope(json!({ "prescription": { "name": "x" } })).unwrap();
        assert_eq!(inner.get("name"), Some(&json!("x")));
    }

    #[test]
    fn missing_or_malformed_envelope_is_rejected() {
        assert_eq!(
            unwrap_envelope(json!({ "name": "x" })),
            Err(RecordError::MissingEnvelope("prescription"))
        );
        assert!(unwrap_envelope(json!({ "prescription": "x" })).is_err());
        assert!(unwrap_envelope(json!([1, 2])).is_err());
    }

    #[test]
    fn create_uses_caller_as_owner() {
        let caller = Uuid::new_v4();
        let other = Uuid::new_v4();
        let new = parse_new(
            object(json!({
                "name": "Amoxicillin",
                "description": "Take twice daily",
                "dr": "Dr. Smith",
                "owner": other.to_string(),
                "_id": "not-yours",
            })),
            caller,
        )
        .unwrap();

        assert_eq!(new.owner, caller);
        assert_eq!(new.name, "Amoxicillin");
        assert_eq!(new.description, "Take twice daily");
        assert_eq!(new.dr, "Dr. Smith");
    }

    #[test]
    fn create_reports_every_missing_field() {
        let err = parse_new(object(json!({ "name": "", "dr": 7 })), Uuid::new_v4()).unwrap_err();
        let RecordError::Invalid { field_errors } = err else {
            panic!("expected validation error");
        };

        assert_eq!(field_errors.len(), 3);
        assert_eq!(field_errors["name"], "This field is required");
        assert_eq!(field_errors["description"], "This field is required");
        assert_eq!(field_errors["dr"], "Must be a string");
    }

    #[test]
    fn blank_fields_are_stripped() {
        let mut fields = object(json!({ "name": "", "description": "kept", "dr": " " }));
        strip_blank_fields(&mut fields);

        assert!(!fields.contains_key("name"));
        assert_eq!(fields.get("description"), Some(&json!("kept")));
        assert_eq!(fields.get("dr"), Some(&json!(" ")));
    }

    #[test]
    fn patch_drops_blanks_owner_and_unknown_fields() {
        let patch = parse_patch(object(json!({
            "name": "",
            "description": "Once a day",
            "owner": Uuid::new_v4().to_string(),
            "colour": "blue",
        })))
        .unwrap();

        assert_eq!(
            patch,
            PrescriptionPatch {
                name: None,
                description: Some("Once a day".to_string()),
                dr: None,
            }
        );
    }

    #[test]
    fn patch_rejects_non_string_values() {
        let err = parse_patch(object(json!({ "name": 12, "dr": null }))).unwrap_err();
        let RecordError::Invalid { field_errors } = err else {
            panic!("expected validation error");
        };
        assert_eq!(field_errors["name"], "Must be a string");
        assert_eq!(field_errors["dr"], "This field is required");
    }

    #[test]
    fn patch_of_only_blanks_is_empty() {
        let patch = parse_patch(object(json!({ "name": "", "dr": "" }))).unwrap();
        assert!(patch.is_empty());
    }
}
