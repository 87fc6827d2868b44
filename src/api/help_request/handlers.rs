use crate::api::error::AppError;
use crate::api::models::*;
use crate::entities::{Entity, HelpRequest};
use axum::{
    Json,
    extract::{Query, State},
};
use tracing::info;

pub async fn list_help_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<HelpRequest>>, AppError> {
    let requests = state.help_requests.list_all().await?;
    info!(count = requests.len(), "Listed help requests");
    Ok(Json(requests))
}

pub async fn create_help_request(
    State(state): State<AppState>,
    Query(params): Query<CreateHelpRequestParams>,
) -> Result<Json<HelpRequest>, AppError> {
    info!(team_id = %params.team_id, "Creating help request");

    let request = HelpRequest {
        id: 0,
        requester_email: params.requester_email,
        team_id: params.team_id,
        table_or_breakout_room: params.table_or_breakout_room,
        request_time: params.request_time,
        explanation: params.explanation,
        solved: params.solved,
    };

    let saved = state.help_requests.save(request).await?;
    info!(id = saved.id, "Help request saved");
    Ok(Json(saved))
}

pub async fn get_help_request(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
) -> Result<Json<HelpRequest>, AppError> {
    let request = state
        .help_requests
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found::<HelpRequest>(&id))?;
    Ok(Json(request))
}

pub async fn update_help_request(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
    Json(incoming): Json<HelpRequest>,
) -> Result<Json<HelpRequest>, AppError> {
    let existing = state
        .help_requests
        .find_by_key(&id)
        .await?
        .ok_or_else(|| AppError::not_found::<HelpRequest>(&id))?;

    let request = HelpRequest {
        id: existing.id,
        ..incoming
    };

    let saved = state.help_requests.save(request).await?;
    info!(id, solved = saved.solved, "Help request updated");
    Ok(Json(saved))
}

pub async fn delete_help_request(
    State(state): State<AppState>,
    Query(IdParam { id }): Query<IdParam>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.help_requests.delete_by_key(&id).await? {
        return Err(AppError::not_found::<HelpRequest>(&id));
    }

    info!(id, "Help request deleted");
    Ok(Json(MessageResponse::deleted(HelpRequest::KIND, id)))
}
