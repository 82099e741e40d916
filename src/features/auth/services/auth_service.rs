use std::sync::Arc;

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::token_service::TokenService;
use crate::features::auth::services::user_resolver::UserResolver;

/// Service for authenticating bearer credentials on incoming requests
pub struct AuthService {
    token_service: Arc<TokenService>,
    user_resolver: Arc<UserResolver>,
}

impl AuthService {
    pub fn new(token_service: Arc<TokenService>, user_resolver: Arc<UserResolver>) -> Self {
        Self {
            token_service,
            user_resolver,
        }
    }

    /// Verify the token, then resolve the acting user
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let verified = self.token_service.verify_token(token).await?;
        let user = self.user_resolver.resolve(&verified).await?;

        tracing::debug!(
            username = %user.username,
            token = %verified.fingerprint(),
            "Request authenticated"
        );

        Ok(AuthenticatedUser {
            user,
            token_fingerprint: verified.fingerprint(),
        })
    }
}
