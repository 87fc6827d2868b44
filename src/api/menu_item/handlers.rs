use crate::api::error::AppError;
use crate::api::models::*;
use crate::entities::{Entity, MenuItem};
use axum::{
    Json,
    extract::{Query, State},
};
use tracing::info;

pub async fn list_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let items = state.menu_items.list_all().await?;
    info!(count = items.len(), "Listed menu items");
    Ok(Json(items))
}

/// Refuses a code that is already stored; changing an item goes through update.
pub async fn create_menu_item(
    State(state): State<AppState>,
    Query(params): Query<CreateMenuItemParams>,
) -> Result<Json<MenuItem>, AppError> {
    info!(code = %params.dining_commons_code, name = %params.name, "Creating menu item");

    if state
        .menu_items
        .find_by_key(&params.dining_commons_code)
        .await?
        .is_some()
    {
        return Err(AppError::already_exists::<MenuItem>(
            &params.dining_commons_code,
        ));
    }

    let item = MenuItem {
        id: 0,
        dining_commons_code: params.dining_commons_code,
        name: params.name,
        station: params.station,
    };

    let saved = state.menu_items.save(item).await?;
    info!(id = saved.id, "Menu item saved");
    Ok(Json(saved))
}

pub async fn get_menu_item(
    State(state): State<AppState>,
    Query(params): Query<DiningCommonsCodeParam>,
) -> Result<Json<MenuItem>, AppError> {
    let code = params.dining_commons_code;
    let item = state
        .menu_items
        .find_by_key(&code)
        .await?
        .ok_or_else(|| AppError::not_found::<MenuItem>(&code))?;
    Ok(Json(item))
}

/// Replaces every field but the key; the stored surrogate id is kept.
pub async fn update_menu_item(
    State(state): State<AppState>,
    Query(params): Query<DiningCommonsCodeParam>,
    Json(incoming): Json<MenuItem>,
) -> Result<Json<MenuItem>, AppError> {
    let code = params.dining_commons_code;
    let existing = state
        .menu_items
        .find_by_key(&code)
        .await?
        .ok_or_else(|| AppError::not_found::<MenuItem>(&code))?;

    let item = MenuItem {
        id: existing.id,
        dining_commons_code: existing.dining_commons_code,
        name: incoming.name,
        station: incoming.station,
    };

    let saved = state.menu_items.save(item).await?;
    info!(code = %code, "Menu item updated");
    Ok(Json(saved))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    Query(params): Query<DiningCommonsCodeParam>,
) -> Result<Json<MessageResponse>, AppError> {
    let code = params.dining_commons_code;
    if !state.menu_items.delete_by_key(&code).await? {
        return Err(AppError::not_found::<MenuItem>(&code));
    }

    info!(code = %code, "Menu item deleted");
    Ok(Json(MessageResponse::deleted(MenuItem::KIND, &code)))
}
