use std::sync::Arc;

use crate::auth::{JwtError, TokenKeys};
use crate::config::SecurityConfig;
use crate::database::PrescriptionStore;
use crate::services::PrescriptionService;

/// Shared state handed to every handler and to the auth middleware
#[derive(Clone)]
pub struct AppState {
    pub prescriptions: PrescriptionService,
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(store: Arc<dyn PrescriptionStore>, security: &SecurityConfig) -> Result<Self, JwtError> {
        Ok(Self {
            prescriptions: PrescriptionService::new(store),
            tokens: Arc::new(TokenKeys::from_secret(&security.jwt_secret)?),
        })
    }
}
