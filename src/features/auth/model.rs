use sha2::{Digest, Sha256};

use crate::modules::store::User;

/// Number of hex characters kept from a token digest
const FINGERPRINT_LEN: usize = 12;

/// A bearer token the data store has confirmed as valid.
///
/// Only `TokenService` can construct one, so user resolution can never run
/// on an unchecked credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken(String);

impl VerifiedToken {
    pub(super) fn new(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> String {
        token_fingerprint(&self.0)
    }
}

/// Acting user attached to the request by the auth middleware
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token_fingerprint: String,
}

/// Short, non-reversible identifier for a token, safe to write to logs
pub fn token_fingerprint(token: &str) -> String {
    let digest = hex::encode(Sha256::digest(token.as_bytes()));
    digest[..FINGERPRINT_LEN].to_string()
}
