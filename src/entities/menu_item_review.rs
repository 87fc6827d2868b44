use super::{Entity, local_datetime};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A diner's rating of a menu item.
///
/// `item_id` is a loose reference: nothing checks it against the menu item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "local_datetime::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Entity for MenuItemReview {
    type Key = i64;

    const KIND: &'static str = "MenuItemReview";

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
