use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{token_fingerprint, VerifiedToken};
use crate::modules::store::DataStore;
use crate::shared::constants::INVALID_CREDENTIALS_MESSAGE;

/// Checks bearer tokens against the data store
pub struct TokenService {
    store: Arc<dyn DataStore>,
}

impl TokenService {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    pub async fn verify_token(&self, token: &str) -> Result<VerifiedToken> {
        if token.is_empty() || !self.store.is_valid_token(token).await? {
            tracing::warn!(
                token = %token_fingerprint(token),
                "Rejected invalid bearer token"
            );
            return Err(AppError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ));
        }

        Ok(VerifiedToken::new(token))
    }
}
