use crate::api::auth::{Role, require_role};
use crate::api::help_request::handlers::*;
use crate::api::models::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/helprequest/all",
            get(list_help_requests)
                .route_layer(middleware::from_fn_with_state(Role::User, require_role)),
        )
        .route(
            "/api/helprequest/post",
            post(create_help_request)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
        .route(
            "/api/helprequest",
            get(get_help_request)
                .route_layer(middleware::from_fn_with_state(Role::User, require_role)),
        )
        .route(
            "/api/helprequest",
            put(update_help_request)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
        .route(
            "/api/helprequest",
            delete(delete_help_request)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
}
