use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::store::Dataset;

/// Policy a reported dataset is claimed to violate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataViolationCategory {
    PersonalData,
    CopyrightInfringement,
    InappropriateContent,
    Other,
}

impl std::fmt::Display for DataViolationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataViolationCategory::PersonalData => write!(f, "personal_data"),
            DataViolationCategory::CopyrightInfringement => write!(f, "copyright_infringement"),
            DataViolationCategory::InappropriateContent => write!(f, "inappropriate_content"),
            DataViolationCategory::Other => write!(f, "other"),
        }
    }
}

/// Report kind discriminator carried on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    #[default]
    DataViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataViolationExample {
    pub data_id: String,
    pub description: Option<String>,
}

/// A report as submitted, before any store lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataViolationReport {
    pub title: String,
    pub description: String,
    pub category: DataViolationCategory,
    pub dataset_id: String,
    pub examples: Vec<DataViolationExample>,
}

/// A report whose dataset and every example data id were found in the store.
///
/// Only `ReportValidator` builds these; `dataset().id` always equals the
/// submitted `dataset_id`.
#[derive(Debug, Clone)]
pub struct ValidatedDataViolationReport {
    report: DataViolationReport,
    dataset: Dataset,
}

impl ValidatedDataViolationReport {
    pub(in crate::features::reports) fn new(report: DataViolationReport, dataset: Dataset) -> Self {
        debug_assert_eq!(report.dataset_id, dataset.id);
        Self { report, dataset }
    }

    pub fn report(&self) -> &DataViolationReport {
        &self.report
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
