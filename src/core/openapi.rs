use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::app;
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::submit_data_violation_report,
        // Health
        app::health_check,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Reports
            reports_dtos::SubmitDataViolationReportDto,
            reports_dtos::DataViolationExampleDto,
            reports_dtos::ReportAcknowledgementDto,
            ApiResponse<reports_dtos::ReportAcknowledgementDto>,
            reports_models::DataViolationCategory,
            reports_models::ReportType,
        )
    ),
    tags(
        (name = "reports", description = "Data violation reports"),
        (name = "health", description = "Liveness probe"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Dataguard API",
        version = "0.1.0",
        description = "Data violation reporting API",
    )
)]
pub struct ApiDoc;

/// Adds the opaque bearer token security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
