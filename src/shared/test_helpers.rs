//! Shared fixtures and recording doubles for unit and handler tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{json, Value};

use crate::core::app::AppServices;
use crate::modules::notification::{NotificationError, NotificationMessage, Notifier};
use crate::modules::store::{
    DataItem, DataStore, DataType, Dataset, DatasetPermission, InMemoryDataStore, Organisation,
    StoreError, StoreFixtures, User,
};

pub const VALID_TOKEN: &str = "valid_token";
pub const DATASET_ID: &str = "aurora_dataset_id";
pub const DATA_IDS: [&str; 2] = ["data_0", "data_1"];
pub const OTHER_DATASET_ID: &str = "other_dataset_id";
pub const OTHER_DATA_ID: &str = "other_data_0";
pub const PUBLISHER_EMAIL: &str = "info@auroraarticles.com";
pub const REPORTER_ORG_ID: &str = "blog_bot_org_id";

const PUBLISHER_ORG_ID: &str = "aurora_org_id";

fn item(dataset_id: &str, id: &str) -> DataItem {
    DataItem {
        dataset_id: dataset_id.to_string(),
        id: id.to_string(),
        value: format!("value of {}", id),
    }
}

/// One reporter in Blog Bot, permissioned on the Aurora dataset
pub fn test_fixtures() -> StoreFixtures {
    let mut data: Vec<DataItem> = DATA_IDS.iter().map(|id| item(DATASET_ID, id)).collect();
    data.push(item(OTHER_DATASET_ID, OTHER_DATA_ID));

    StoreFixtures {
        users: vec![User {
            username: "username".to_string(),
            full_name: "First Last".to_string(),
            email: "user@blogbot.com".to_string(),
            org_id: REPORTER_ORG_ID.to_string(),
        }],
        organisations: vec![
            Organisation {
                id: PUBLISHER_ORG_ID.to_string(),
                name: "Aurora Articles".to_string(),
                email: PUBLISHER_EMAIL.to_string(),
            },
            Organisation {
                id: REPORTER_ORG_ID.to_string(),
                name: "Blog Bot".to_string(),
                email: "info@blogbot.com".to_string(),
            },
        ],
        datasets: vec![
            Dataset {
                org_id: PUBLISHER_ORG_ID.to_string(),
                id: DATASET_ID.to_string(),
                name: "Aurora Articles Catalogue".to_string(),
                data_type: DataType::Text,
            },
            Dataset {
                org_id: PUBLISHER_ORG_ID.to_string(),
                id: OTHER_DATASET_ID.to_string(),
                name: "Aurora Image Archive".to_string(),
                data_type: DataType::Image,
            },
        ],
        data,
        tokens: HashMap::from([(VALID_TOKEN.to_string(), "username".to_string())]),
        permissions: vec![DatasetPermission {
            org_id: REPORTER_ORG_ID.to_string(),
            dataset_id: DATASET_ID.to_string(),
        }],
    }
}

/// A store lookup as observed by `RecordingStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    GetUser(String),
    IsValidToken(String),
    GetUserFromToken(String),
    VerifyDataId { data_id: String, dataset_id: String },
    GetDataset(String),
    IsPermissionedForDataset { username: String, dataset_id: String },
    GetOrg(String),
}

/// In-memory store that records every lookup in call order
pub struct RecordingStore {
    inner: InMemoryDataStore,
    calls: Mutex<Vec<StoreCall>>,
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new(test_fixtures())
    }
}

impl RecordingStore {
    pub fn new(fixtures: StoreFixtures) -> Self {
        Self {
            inner: InMemoryDataStore::new(fixtures),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Underlying store, for lookups that should not be recorded
    pub fn inner(&self) -> &InMemoryDataStore {
        &self.inner
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DataStore for RecordingStore {
    async fn get_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.record(StoreCall::GetUser(username.to_string()));
        self.inner.get_user(username).await
    }

    async fn is_valid_token(&self, token: &str) -> Result<bool, StoreError> {
        self.record(StoreCall::IsValidToken(token.to_string()));
        self.inner.is_valid_token(token).await
    }

    async fn get_user_from_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        self.record(StoreCall::GetUserFromToken(token.to_string()));
        self.inner.get_user_from_token(token).await
    }

    async fn verify_data_id(&self, data_id: &str, dataset_id: &str) -> Result<bool, StoreError> {
        self.record(StoreCall::VerifyDataId {
            data_id: data_id.to_string(),
            dataset_id: dataset_id.to_string(),
        });
        self.inner.verify_data_id(data_id, dataset_id).await
    }

    async fn get_dataset(&self, dataset_id: &str) -> Result<Option<Dataset>, StoreError> {
        self.record(StoreCall::GetDataset(dataset_id.to_string()));
        self.inner.get_dataset(dataset_id).await
    }

    async fn is_permissioned_for_dataset(
        &self,
        user: &User,
        dataset_id: &str,
    ) -> Result<bool, StoreError> {
        self.record(StoreCall::IsPermissionedForDataset {
            username: user.username.clone(),
            dataset_id: dataset_id.to_string(),
        });
        self.inner.is_permissioned_for_dataset(user, dataset_id).await
    }

    async fn get_org(&self, org_id: &str) -> Result<Option<Organisation>, StoreError> {
        self.record(StoreCall::GetOrg(org_id.to_string()));
        self.inner.get_org(org_id).await
    }
}

/// Notifier that keeps delivered messages instead of sending them
#[derive(Default)]
pub struct RecordingNotifier {
    fail: bool,
    attempts: Mutex<usize>,
    sent: Mutex<Vec<NotificationMessage>>,
}

impl RecordingNotifier {
    /// Every send attempt fails with a delivery error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError> {
        *self.attempts.lock().unwrap() += 1;

        if self.fail {
            return Err(NotificationError::Delivery {
                recipient: message.recipient.clone(),
                reason: "mailbox unreachable".to_string(),
            });
        }

        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Full API router wired to the given doubles
pub fn test_server(store: Arc<RecordingStore>, notifier: Arc<RecordingNotifier>) -> TestServer {
    let services = AppServices::new(store, notifier);
    TestServer::new(services.api_router()).unwrap()
}

/// A valid submission for the fixture dataset citing both fixture data ids
pub fn report_request() -> Value {
    json!({
        "title": "Personally Identifiable Information Violation",
        "description": "This dataset contains personal phone numbers.",
        "category": "personal_data",
        "dataset_id": DATASET_ID,
        "examples": [
            {"data_id": DATA_IDS[0], "description": "Contains a phone number"},
            {"data_id": DATA_IDS[1]}
        ],
        "report_type": "data_violation"
    })
}
