use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{
    DataViolationCategory, DataViolationExample, DataViolationReport, ReportType,
};

/// A single offending data item referenced by a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DataViolationExampleDto {
    /// Id of the data item inside the reported dataset
    #[validate(length(min = 1, message = "Data ID must not be empty"))]
    pub data_id: String,

    /// Optional note on what is wrong with this item
    pub description: Option<String>,
}

/// Request DTO for filing a data violation report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "Personally Identifiable Information Issue",
    "description": "There are various examples of personal details in the Aurora Articles dataset.",
    "report_type": "data_violation",
    "category": "personal_data",
    "dataset_id": "fake_aurora_dataset_id",
    "examples": [
        {"data_id": "fake_aurora_data_id_0", "description": "Contains reference to phone numbers"},
        {"data_id": "fake_aurora_data_id_1"}
    ]
}))]
pub struct SubmitDataViolationReportDto {
    pub title: String,

    /// Free text, passed to the publisher verbatim
    pub description: String,

    /// Defaults to `data_violation` when omitted
    #[serde(default)]
    pub report_type: ReportType,

    pub category: DataViolationCategory,

    #[validate(length(min = 1, message = "Dataset ID must not be empty"))]
    pub dataset_id: String,

    /// Offending items, reported in this order
    #[validate(nested)]
    pub examples: Vec<DataViolationExampleDto>,
}

impl From<SubmitDataViolationReportDto> for DataViolationReport {
    fn from(dto: SubmitDataViolationReportDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            category: dto.category,
            dataset_id: dto.dataset_id,
            examples: dto
                .examples
                .into_iter()
                .map(|e| DataViolationExample {
                    data_id: e.data_id,
                    description: e.description,
                })
                .collect(),
        }
    }
}

/// Response DTO acknowledging a dispatched report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportAcknowledgementDto {
    /// Reference for correlating the notification with this request
    pub reference_id: Uuid,
    pub dataset_id: String,
    pub examples_reported: usize,
    pub submitted_at: DateTime<Utc>,
}
