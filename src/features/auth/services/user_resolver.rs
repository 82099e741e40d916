use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::VerifiedToken;
use crate::modules::store::{DataStore, User};
use crate::shared::constants::INVALID_CREDENTIALS_MESSAGE;

/// Maps a verified token to the user it was issued to
pub struct UserResolver {
    store: Arc<dyn DataStore>,
}

impl UserResolver {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, token: &VerifiedToken) -> Result<User> {
        // Same response as an invalid token so callers cannot probe for orphaned tokens
        self.store
            .get_user_from_token(token.as_str())
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    token = %token.fingerprint(),
                    "Valid token did not resolve to a user"
                );
                AppError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            })
    }
}
