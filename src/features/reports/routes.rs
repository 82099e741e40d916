use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::{ReportService, ReportValidator};

/// Create routes for the reports feature
///
/// All routes require the auth middleware to be applied by the caller
pub fn routes(report_validator: Arc<ReportValidator>, report_service: Arc<ReportService>) -> Router {
    let state = ReportState {
        report_validator,
        report_service,
    };

    Router::new()
        .route(
            "/report/data_violation",
            post(handlers::submit_data_violation_report),
        )
        .with_state(state)
}
