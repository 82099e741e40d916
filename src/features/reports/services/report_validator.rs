use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{DataViolationReport, ValidatedDataViolationReport};
use crate::modules::store::DataStore;

/// Confirms a report references a real dataset and real data items inside it
pub struct ReportValidator {
    store: Arc<dyn DataStore>,
}

impl ReportValidator {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Resolve the dataset, then check each example in submission order.
    ///
    /// Stops at the first unknown reference.
    pub async fn validate(&self, report: DataViolationReport) -> Result<ValidatedDataViolationReport> {
        let dataset = self
            .store
            .get_dataset(&report.dataset_id)
            .await?
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Encountered invalid dataset ID {}",
                    report.dataset_id
                ))
            })?;

        for example in &report.examples {
            if !self.store.verify_data_id(&example.data_id, &dataset.id).await? {
                return Err(AppError::Validation(format!(
                    "Encountered invalid data ID {}",
                    example.data_id
                )));
            }
        }

        Ok(ValidatedDataViolationReport::new(report, dataset))
    }
}
