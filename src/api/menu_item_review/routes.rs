use crate::api::auth::{Role, require_role};
use crate::api::menu_item_review::handlers::*;
use crate::api::models::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/menuitemreview/all",
            get(list_menu_item_reviews)
                .route_layer(middleware::from_fn_with_state(Role::User, require_role)),
        )
        .route(
            "/api/menuitemreview/post",
            post(create_menu_item_review)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
        .route(
            "/api/menuitemreview",
            get(get_menu_item_review)
                .route_layer(middleware::from_fn_with_state(Role::User, require_role)),
        )
        .route(
            "/api/menuitemreview",
            put(update_menu_item_review)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
        .route(
            "/api/menuitemreview",
            delete(delete_menu_item_review)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
}
