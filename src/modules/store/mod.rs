//! Data store interface
//!
//! Read-only lookups for users, organisations, datasets, tokens and data items.
//! The backing implementation is chosen at startup; the request pipeline only
//! ever sees `Arc<dyn DataStore>`.

mod fixtures;
mod memory_store;
mod models;

pub use fixtures::{DatasetPermission, StoreFixtures};
pub use memory_store::InMemoryDataStore;
pub use models::{DataItem, DataType, Dataset, Organisation, User};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to load store fixtures: {0}")]
    Fixture(String),

    #[allow(dead_code)]
    #[error("Data store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait DataStore: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn is_valid_token(&self, token: &str) -> Result<bool, StoreError>;

    /// Resolve the user a token was issued to
    async fn get_user_from_token(&self, token: &str) -> Result<Option<User>, StoreError>;

    /// Whether `data_id` exists inside `dataset_id` (not in any dataset)
    async fn verify_data_id(&self, data_id: &str, dataset_id: &str) -> Result<bool, StoreError>;

    async fn get_dataset(&self, dataset_id: &str) -> Result<Option<Dataset>, StoreError>;

    async fn is_permissioned_for_dataset(
        &self,
        user: &User,
        dataset_id: &str,
    ) -> Result<bool, StoreError>;

    async fn get_org(&self, org_id: &str) -> Result<Option<Organisation>, StoreError>;
}
