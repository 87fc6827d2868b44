pub mod auth;
pub mod error;
pub mod help_request;
pub mod menu_item;
pub mod menu_item_review;
pub mod models;

// Re-exports
pub use error::AppError;
pub use models::*;

use axum::{Json, Router, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Builds the full application router.
///
/// Every request passes through tracing and [`auth::authenticate`]; the
/// per-route role guards then decide whether the handler runs.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(menu_item::routes())
        .merge(menu_item_review::routes())
        .merge(help_request::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    state.sessions.clone(),
                    auth::authenticate,
                )),
        )
        .with_state(state)
}
