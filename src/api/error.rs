use crate::api::models::ErrorResponse;
use crate::entities::Entity;
use crate::storage::StorageError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{kind} with id {key} not found")]
    EntityNotFound { kind: &'static str, key: String },

    #[error("{kind} with id {key} already exists")]
    EntityExists { kind: &'static str, key: String },

    #[error("Access is denied")]
    Forbidden,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn not_found<E: Entity>(key: &E::Key) -> Self {
        AppError::EntityNotFound {
            kind: E::KIND,
            key: key.to_string(),
        }
    }

    pub fn already_exists<E: Entity>(key: &E::Key) -> Self {
        AppError::EntityExists {
            kind: E::KIND,
            key: key.to_string(),
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::EntityNotFound { .. } => "EntityNotFoundException",
            AppError::EntityExists { .. } => "EntityExistsException",
            AppError::Forbidden => "AccessDeniedException",
            AppError::Storage(_) => "InternalError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EntityNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::EntityExists { .. } => StatusCode::CONFLICT,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Storage(e) = &self {
            error!("Internal error: {}", e);
        }

        let body = Json(ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
