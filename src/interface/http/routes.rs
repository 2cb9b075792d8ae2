use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::application::AdminService;

use super::handlers::{admin_info_handler, health_handler, logs_handler, AppState};

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin_info", get(admin_info_handler))
        .route("/logs", get(logs_handler))
}

/// `prefix` additionally mounts the admin routes below it, e.g. `/flask/admin_info`
pub fn create_router(admin_service: Arc<AdminService>, prefix: Option<&str>) -> Router {
    let state = AppState { admin_service };

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(admin_routes());

    if let Some(prefix) = prefix.map(normalize_prefix).filter(|p| p != "/") {
        router = router.nest(&prefix, admin_routes());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn normalize_prefix(prefix: &str) -> String {
    format!("/{}", prefix.trim_matches('/'))
}
