//! Persisted record types.
//!
//! Each entity kind is a flat record with a unique key inside its store and a
//! numeric surrogate `id` that the store assigns on first insert.

pub mod help_request;
pub mod menu_item;
pub mod menu_item_review;

pub use help_request::HelpRequest;
pub use menu_item::MenuItem;
pub use menu_item_review::MenuItemReview;

use std::fmt::{Debug, Display};

/// A record kind that can live in a [`Store`](crate::storage::Store).
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Unique key of a record within its store.
    type Key: Clone + Ord + Display + Debug + Send + Sync + 'static;

    /// Kind name used in error messages.
    const KIND: &'static str;

    fn key(&self) -> &Self::Key;

    /// Store-managed surrogate id. `0` marks a record that was never stored.
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}

/// Lenient ISO-8601 local date-time parsing.
///
/// Accepts `2022-04-20T17:35:00`, fractional seconds, and the minute-precision
/// form `2022-04-20T17:35`. A space separator is accepted as well.
pub mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, de::Error};

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid local date-time: {raw}")))
    }
}
