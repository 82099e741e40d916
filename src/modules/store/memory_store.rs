use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::fixtures::StoreFixtures;
use super::models::{Dataset, Organisation, User};
use super::{DataStore, StoreError};

/// Data store backed by immutable in-process maps
pub struct InMemoryDataStore {
    users: HashMap<String, User>,
    organisations: HashMap<String, Organisation>,
    datasets: HashMap<String, Dataset>,
    /// dataset_id -> data ids
    data: HashMap<String, HashSet<String>>,
    tokens: HashMap<String, String>,
    /// (org_id, dataset_id)
    permissions: HashSet<(String, String)>,
}

impl InMemoryDataStore {
    pub fn new(fixtures: StoreFixtures) -> Self {
        let mut data: HashMap<String, HashSet<String>> = HashMap::new();
        for item in fixtures.data {
            data.entry(item.dataset_id).or_default().insert(item.id);
        }

        Self {
            users: fixtures
                .users
                .into_iter()
                .map(|u| (u.username.clone(), u))
                .collect(),
            organisations: fixtures
                .organisations
                .into_iter()
                .map(|o| (o.id.clone(), o))
                .collect(),
            datasets: fixtures
                .datasets
                .into_iter()
                .map(|d| (d.id.clone(), d))
                .collect(),
            data,
            tokens: fixtures.tokens,
            permissions: fixtures
                .permissions
                .into_iter()
                .map(|p| (p.org_id, p.dataset_id))
                .collect(),
        }
    }

    pub fn demo() -> Result<Self, StoreError> {
        Ok(Self::new(StoreFixtures::demo()?))
    }

    pub fn summary(&self) -> String {
        format!(
            "users={}, organisations={}, datasets={}, tokens={}",
            self.users.len(),
            self.organisations.len(),
            self.datasets.len(),
            self.tokens.len()
        )
    }
}

#[async_trait]
impl DataStore for InMemoryDataStore {
    async fn get_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(username).cloned())
    }

    async fn is_valid_token(&self, token: &str) -> Result<bool, StoreError> {
        Ok(self.tokens.contains_key(token))
    }

    async fn get_user_from_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        match self.tokens.get(token) {
            Some(username) => self.get_user(username).await,
            None => Ok(None),
        }
    }

    async fn verify_data_id(&self, data_id: &str, dataset_id: &str) -> Result<bool, StoreError> {
        Ok(self
            .data
            .get(dataset_id)
            .is_some_and(|ids| ids.contains(data_id)))
    }

    async fn get_dataset(&self, dataset_id: &str) -> Result<Option<Dataset>, StoreError> {
        Ok(self.datasets.get(dataset_id).cloned())
    }

    async fn is_permissioned_for_dataset(
        &self,
        user: &User,
        dataset_id: &str,
    ) -> Result<bool, StoreError> {
        Ok(self
            .permissions
            .contains(&(user.org_id.clone(), dataset_id.to_string())))
    }

    async fn get_org(&self, org_id: &str) -> Result<Option<Organisation>, StoreError> {
        Ok(self.organisations.get(org_id).cloned())
    }
}
