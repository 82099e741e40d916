use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{ReportAcknowledgementDto, SubmitDataViolationReportDto};
use crate::features::reports::services::{ReportService, ReportValidator};
use crate::shared::constants::REPORT_ACCEPTED_MESSAGE;
use crate::shared::types::ApiResponse;

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_validator: Arc<ReportValidator>,
    pub report_service: Arc<ReportService>,
}

/// File a data violation report against a dataset
///
/// The dataset and every example data id must exist, and the caller's
/// organisation must be permissioned for the dataset. On success the dataset's
/// publisher is notified by email.
#[utoipa::path(
    post,
    path = "/report/data_violation",
    request_body = SubmitDataViolationReportDto,
    responses(
        (status = 200, description = "Report accepted and publisher notified", body = ApiResponse<ReportAcknowledgementDto>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "User is not permissioned for the dataset"),
        (status = 413, description = "Request body exceeds the configured limit"),
        (status = 422, description = "Malformed body or unknown dataset/data id"),
        (status = 500, description = "Inconsistent store data or notification failure")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn submit_data_violation_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    AppJson(dto): AppJson<SubmitDataViolationReportDto>,
) -> Result<Json<ApiResponse<ReportAcknowledgementDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!(
        username = %user.user.username,
        token = %user.token_fingerprint,
        dataset_id = %dto.dataset_id,
        examples = dto.examples.len(),
        "Received data violation report"
    );

    let report = state.report_validator.validate(dto.into()).await?;
    let acknowledgement = state.report_service.submit(&user.user, report).await?;

    Ok(Json(ApiResponse::success(
        Some(acknowledgement),
        Some(REPORT_ACCEPTED_MESSAGE.to_string()),
        None,
    )))
}
