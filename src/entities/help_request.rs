use super::{Entity, local_datetime};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team's request for help during a lab section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default)]
    pub id: i64,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "local_datetime::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Entity for HelpRequest {
    type Key = i64;

    const KIND: &'static str = "HelpRequest";

    fn key(&self) -> &i64 {
        &self.id
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
