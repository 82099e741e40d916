use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::models::{DataItem, Dataset, Organisation, User};
use super::StoreError;

/// Demo data compiled into the binary, used when no fixture file is configured
const DEMO_FIXTURES: &str = include_str!("../../../fixtures/demo_store.json");

/// Grants every member of `org_id` access to `dataset_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPermission {
    pub org_id: String,
    pub dataset_id: String,
}

/// Serializable snapshot used to seed the in-memory store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreFixtures {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub organisations: Vec<Organisation>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub data: Vec<DataItem>,
    /// token -> username
    #[serde(default)]
    pub tokens: HashMap<String, String>,
    #[serde(default)]
    pub permissions: Vec<DatasetPermission>,
}

impl StoreFixtures {
    pub fn demo() -> Result<Self, StoreError> {
        Self::from_json(DEMO_FIXTURES)
    }

    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        serde_json::from_str(raw).map_err(|e| StoreError::Fixture(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Fixture(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }
}
