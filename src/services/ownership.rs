use uuid::Uuid;

use crate::database::models::Prescription;
use crate::services::ServiceError;

/// Records that belong to exactly one user
pub trait Owned {
    fn owner(&self) -> Uuid;
    fn record_id(&self) -> Uuid;
}

impl Owned for Prescription {
    fn owner(&self) -> Uuid {
        self.owner
    }

    fn record_id(&self) -> Uuid {
        self.id
    }
}

/// Turn an empty lookup into `NotFound`; pass a found record through unchanged.
pub fn handle_404<T>(found: Option<T>, id: &str) -> Result<T, ServiceError> {
    found.ok_or_else(|| ServiceError::NotFound(id.to_string()))
}

/// Fail with `NotOwner` unless `caller` owns `record`.
pub fn require_ownership<T: Owned>(caller: Uuid, record: &T) -> Result<(), ServiceError> {
    if record.owner() == caller {
        return Ok(());
    }
    tracing::warn!(
        "Ownership check failed: user {} attempted to modify record {} owned by {}",
        caller,
        record.record_id(),
        record.owner()
    );
    Err(ServiceError::NotOwner {
        caller,
        record: record.record_id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc {
        id: Uuid,
        owner: Uuid,
    }

    impl Owned for Doc {
        fn owner(&self) -> Uuid {
            self.owner
        }

        fn record_id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn owner_passes_guard() {
        let owner = Uuid::new_v4();
        let doc = Doc { id: Uuid::new_v4(), owner };
        assert!(require_ownership(owner, &doc).is_ok());
    }

    #[test]
    fn other_user_is_rejected() {
        let doc = Doc {
            id: Uuid::new_v4(),
            owner: Uuid::new_v4(),
        };
        let intruder = Uuid::new_v4();

        match require_ownership(intruder, &doc) {
            Err(ServiceError::NotOwner { caller, record }) => {
                assert_eq!(caller, intruder);
                assert_eq!(record, doc.id);
            }
            other => panic!("expected NotOwner, got {other:?}"),
        }
    }

    #[test]
    fn missing_record_is_not_found() {
        let result: Result<Doc, _> = handle_404(None, "abc");
        assert!(matches!(result, Err(ServiceError::NotFound(id)) if id == "abc"));
    }

    #[test]
    fn found_record_passes_through() {
        assert_eq!(handle_404(Some(5), "abc").unwrap(), 5);
    }
}
