use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::ReportAcknowledgementDto;
use crate::features::reports::models::ValidatedDataViolationReport;
use crate::features::reports::services::compose_violation_notice;
use crate::modules::notification::{NotificationMessage, Notifier};
use crate::modules::store::{DataStore, User};

/// Authorizes validated reports and notifies the publishing organisation
pub struct ReportService {
    store: Arc<dyn DataStore>,
    notifier: Arc<dyn Notifier>,
}

impl ReportService {
    pub fn new(store: Arc<dyn DataStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Submit a validated report on behalf of `reporter`.
    ///
    /// Every step is a hard gate: nothing is sent unless all lookups succeed.
    /// Submissions are not deduplicated.
    pub async fn submit(
        &self,
        reporter: &User,
        report: ValidatedDataViolationReport,
    ) -> Result<ReportAcknowledgementDto> {
        let dataset = report.dataset();

        if !self
            .store
            .is_permissioned_for_dataset(reporter, &dataset.id)
            .await?
        {
            tracing::warn!(
                username = %reporter.username,
                dataset_id = %dataset.id,
                "Reporter is not permissioned for dataset"
            );
            return Err(AppError::Forbidden(
                "User is not permissioned for dataset.".to_string(),
            ));
        }

        let publisher_org = self.store.get_org(&dataset.org_id).await?.ok_or_else(|| {
            AppError::Internal(format!(
                "Failed to find organisation {} for dataset {}",
                dataset.org_id, dataset.id
            ))
        })?;

        let reporter_org = self.store.get_org(&reporter.org_id).await?.ok_or_else(|| {
            AppError::Internal(format!(
                "Failed to find organisation {} for reporter {}",
                reporter.org_id, reporter.username
            ))
        })?;

        let notice = compose_violation_notice(reporter, &reporter_org, &report)?;
        let message = NotificationMessage {
            recipient: publisher_org.email,
            title: notice.title,
            body: notice.body,
        };
        self.notifier.send(&message).await?;

        let acknowledgement = ReportAcknowledgementDto {
            reference_id: Uuid::now_v7(),
            dataset_id: dataset.id.clone(),
            examples_reported: report.report().examples.len(),
            submitted_at: Utc::now(),
        };

        tracing::info!(
            reference_id = %acknowledgement.reference_id,
            reporter = %reporter.username,
            dataset_id = %dataset.id,
            publisher_org = %publisher_org.id,
            category = %report.report().category,
            "Data violation report dispatched"
        );

        Ok(acknowledgement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{
        DataViolationCategory, DataViolationExample, DataViolationReport,
    };
    use crate::features::reports::services::ReportValidator;
    use crate::shared::test_helpers::{
        test_fixtures, RecordingNotifier, RecordingStore, DATASET_ID, DATA_IDS,
        PUBLISHER_EMAIL, REPORTER_ORG_ID,
    };

    async fn validated(store: Arc<RecordingStore>) -> ValidatedDataViolationReport {
        let report = DataViolationReport {
            title: "PII".to_string(),
            description: "Contains personal data".to_string(),
            category: DataViolationCategory::PersonalData,
            dataset_id: DATASET_ID.to_string(),
            examples: DATA_IDS
                .iter()
                .map(|id| DataViolationExample {
                    data_id: id.to_string(),
                    description: None,
                })
                .collect(),
        };
        ReportValidator::new(store).validate(report).await.unwrap()
    }

    async fn reporter(store: &RecordingStore) -> User {
        store.inner().get_user("username").await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_submit_notifies_publisher_once() {
        let store = Arc::new(RecordingStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ReportService::new(store.clone(), notifier.clone());

        let ack = service
            .submit(&reporter(&store).await, validated(store.clone()).await)
            .await
            .unwrap();

        assert_eq!(ack.dataset_id, DATASET_ID);
        assert_eq!(ack.examples_reported, 2);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, PUBLISHER_EMAIL);
        for id in DATA_IDS {
            assert!(sent[0].body.contains(id));
        }
    }

    #[tokio::test]
    async fn test_unpermissioned_reporter_is_forbidden() {
        let mut fixtures = test_fixtures();
        fixtures.permissions.clear();
        let store = Arc::new(RecordingStore::new(fixtures));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ReportService::new(store.clone(), notifier.clone());

        let result = service
            .submit(&reporter(&store).await, validated(store.clone()).await)
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_publisher_org_is_internal_error() {
        let mut fixtures = test_fixtures();
        fixtures.organisations.retain(|o| o.id == REPORTER_ORG_ID);
        let store = Arc::new(RecordingStore::new(fixtures));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ReportService::new(store.clone(), notifier.clone());

        let result = service
            .submit(&reporter(&store).await, validated(store.clone()).await)
            .await;

        assert!(matches!(result, Err(AppError::Internal(msg)) if msg.contains("dataset")));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_reporter_org_is_internal_error() {
        let mut fixtures = test_fixtures();
        fixtures.organisations.retain(|o| o.id != REPORTER_ORG_ID);
        let store = Arc::new(RecordingStore::new(fixtures));
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ReportService::new(store.clone(), notifier.clone());

        let result = service
            .submit(&reporter(&store).await, validated(store.clone()).await)
            .await;

        assert!(matches!(result, Err(AppError::Internal(msg)) if msg.contains("reporter")));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_propagated() {
        let store = Arc::new(RecordingStore::default());
        let notifier = Arc::new(RecordingNotifier::failing());
        let service = ReportService::new(store.clone(), notifier.clone());

        let result = service
            .submit(&reporter(&store).await, validated(store.clone()).await)
            .await;

        assert!(matches!(result, Err(AppError::Notification(_))));
        assert_eq!(notifier.attempts(), 1);
    }

    #[tokio::test]
    async fn test_repeated_submissions_are_not_deduplicated() {
        let store = Arc::new(RecordingStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ReportService::new(store.clone(), notifier.clone());
        let reporter = reporter(&store).await;

        let first = service
            .submit(&reporter, validated(store.clone()).await)
            .await
            .unwrap();
        let second = service
            .submit(&reporter, validated(store.clone()).await)
            .await
            .unwrap();

        assert_ne!(first.reference_id, second.reference_id);
        assert_eq!(notifier.sent().len(), 2);
    }
}
