use crate::api::auth::{Role, require_role};
use crate::api::menu_item::handlers::*;
use crate::api::models::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/ucsbdiningcommonsmenuitem/all",
            get(list_menu_items)
                .route_layer(middleware::from_fn_with_state(Role::User, require_role)),
        )
        .route(
            "/api/ucsbdiningcommonsmenuitem/post",
            post(create_menu_item)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
        .route(
            "/api/ucsbdiningcommonsmenuitem",
            get(get_menu_item)
                .route_layer(middleware::from_fn_with_state(Role::User, require_role)),
        )
        .route(
            "/api/ucsbdiningcommonsmenuitem",
            put(update_menu_item)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
        .route(
            "/api/ucsbdiningcommonsmenuitem",
            delete(delete_menu_item)
                .route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
}
