use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::application::AdminService;
use crate::domain::{LogBundle, StatusSnapshot};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<AdminService>,
}

/// Handler for GET /health
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "adminwatch"
        })),
    )
}

/// Handler for GET /admin_info
#[tracing::instrument(skip_all)]
pub async fn admin_info_handler(State(state): State<AppState>) -> Json<StatusSnapshot> {
    Json(state.admin_service.status_snapshot().await)
}

/// Handler for GET /logs
#[tracing::instrument(skip_all)]
pub async fn logs_handler(State(state): State<AppState>) -> Json<LogBundle> {
    Json(state.admin_service.log_snapshot().await)
}
