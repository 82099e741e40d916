use std::sync::Arc;

use axum::http::StatusCode;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;

use crate::core::middleware;
use crate::features::auth::{AuthService, TokenService, UserResolver};
use crate::features::reports::{routes as reports_routes, ReportService, ReportValidator};
use crate::modules::notification::Notifier;
use crate::modules::store::DataStore;

/// Services shared by the request pipeline, wired once at startup
pub struct AppServices {
    pub auth_service: Arc<AuthService>,
    pub report_validator: Arc<ReportValidator>,
    pub report_service: Arc<ReportService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DataStore>, notifier: Arc<dyn Notifier>) -> Self {
        let token_service = Arc::new(TokenService::new(Arc::clone(&store)));
        let user_resolver = Arc::new(UserResolver::new(Arc::clone(&store)));
        let auth_service = Arc::new(AuthService::new(token_service, user_resolver));

        let report_validator = Arc::new(ReportValidator::new(Arc::clone(&store)));
        let report_service = Arc::new(ReportService::new(store, notifier));

        Self {
            auth_service,
            report_validator,
            report_service,
        }
    }

    /// API routes without docs, CORS or tracing layers
    pub fn api_router(&self) -> Router {
        // Protected routes (require bearer token)
        let protected_routes = Router::new()
            .merge(reports_routes::routes(
                Arc::clone(&self.report_validator),
                Arc::clone(&self.report_service),
            ))
            .route_layer(from_fn_with_state(
                Arc::clone(&self.auth_service),
                middleware::auth_middleware,
            ));

        let health_route = Router::new().route("/health", get(health_check));

        Router::new()
            .merge(protected_routes)
            .merge(health_route)
            .layer(from_fn(middleware::process_time_middleware))
    }
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "health"
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
