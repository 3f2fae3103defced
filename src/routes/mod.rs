pub mod announcements;
pub mod health;
pub mod metrics;

use axum::{
    routing::{get, put},
    Router,
};

use crate::AppState;

/// Build the API router. CORS and request tracing are layered on by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        // Announcements (both with and without trailing slash)
        .route(
            "/announcements",
            get(announcements::list_active).post(announcements::create_announcement),
        )
        .route(
            "/announcements/",
            get(announcements::list_active).post(announcements::create_announcement),
        )
        .route("/announcements/all", get(announcements::list_all))
        .route(
            "/announcements/{id}",
            put(announcements::update_announcement).delete(announcements::delete_announcement),
        )
        .with_state(state)
}
