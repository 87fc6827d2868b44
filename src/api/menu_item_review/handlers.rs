use crate::api::error::AppError;
use crate::api::models::*;
use crate::entities::{Entity, MenuItemReview};
use axum::{
    Json,
    extract::{Query, State},
};
use tracing::info;

pub async fn list_menu_item_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItemReview>>, AppError> {
    let reviews = state.menu_item_reviews.list_all().await?;
    info!(count = reviews.len(), "Listed menu item reviews");
    Ok(Json(reviews))
}

/// The id is always generated; `itemId` is stored as given.
pub async fn create_menu_item_review(
    State(state): State<AppState>,
    Query(params): Query<CreateMenuItemReviewParams>,
) -> Result<Json<MenuItemReview>, AppError> {
    info!(
        item_id = params.item_id,
        stars = params.stars,
        "Creating menu item review"
    );

    let review = MenuItemReview {
        id: 0,
        item_id: params.item_id,
        reviewer_email: params.reviewer_email,
        stars: params.stars,
        date_reviewed: params.date_reviewed,
        comments: params.comments,
    };

    let saved = state.menu_item_reviews.save(review).await?;
    info!(id = saved.id, "Menu item review saved");
    Ok(Json(saved))
}

pub async fn get_menu_item_review(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
) -> Result<Json<MenuItemReview>, AppError> {
    let review = state
        .menu_item_reviews
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found::<MenuItemReview>(&id))?;
    Ok(Json(review))
}

pub async fn update_menu_item_review(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
    Json(incoming): Json<MenuItemReview>,
) -> Result<Json<MenuItemReview>, AppError> {
    let existing = state
        .menu_item_reviews
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found::<MenuItemReview>(&id))?;

    let review = MenuItemReview {
        id: existing.id,
        ..incoming
    };

    let saved = state.menu_item_reviews.save(review).await?;
    info!(id, "Menu item review updated");
    Ok(Json(saved))
}

pub async fn delete_menu_item_review(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.menu_item_reviews.delete_by_key(&id).await? {
        return Err(AppError::not_found::<MenuItemReview>(&id));
    }

    info!(id, "Menu item review deleted");
    Ok(Json(MessageResponse::deleted(MenuItemReview::KIND, id)))
}
