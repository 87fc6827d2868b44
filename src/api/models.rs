use crate::api::auth::SessionRegistry;
use crate::entities::{HelpRequest, MenuItem, MenuItemReview, local_datetime};
use crate::storage::{MemoryStore, SqliteStore, Store};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_items: Arc<dyn Store<MenuItem>>,
    pub menu_item_reviews: Arc<dyn Store<MenuItemReview>>,
    pub help_requests: Arc<dyn Store<HelpRequest>>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn in_memory(sessions: SessionRegistry) -> Self {
        Self {
            menu_items: Arc::new(MemoryStore::<MenuItem>::new()),
            menu_item_reviews: Arc::new(MemoryStore::<MenuItemReview>::new()),
            help_requests: Arc::new(MemoryStore::<HelpRequest>::new()),
            sessions: Arc::new(sessions),
        }
    }

    pub fn with_sqlite(store: SqliteStore, sessions: SessionRegistry) -> Self {
        Self {
            menu_items: Arc::new(store.clone()),
            menu_item_reviews: Arc::new(store.clone()),
            help_requests: Arc::new(store),
            sessions: Arc::new(sessions),
        }
    }
}

/// Query parameters for creating a menu item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

/// Query parameters for creating a menu item review
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "local_datetime::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

/// Query parameters for creating a help request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "local_datetime::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

/// Selects a menu item by its dining commons code
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsCodeParam {
    pub dining_commons_code: String,
}

/// Selects a record by numeric id
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: i64,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Confirmation returned by delete endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted(kind: &str, key: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{} with id {} deleted", kind, key),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}
