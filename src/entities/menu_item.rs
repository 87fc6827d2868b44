use super::Entity;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dish served at one of the dining commons.
///
/// Keyed by `dining_commons_code`; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default)]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for MenuItem {
    type Key = String;

    const KIND: &'static str = "UCSBDiningCommonsMenuItem";

    fn key(&self) -> &String {
        &self.dining_commons_code
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let item = MenuItem {
            id: 7,
            dining_commons_code: "ortega".to_string(),
            name: "Tofu Banh Mi Sandwich (v)".to_string(),
            station: "Entree Specials".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["diningCommonsCode"], "ortega");
        assert_eq!(json["id"], 7);
        assert!(json.get("dining_commons_code").is_none());
    }

    #[test]
    fn id_is_optional_in_request_bodies() {
        let item: MenuItem = serde_json::from_str(
            r#"{"diningCommonsCode":"dlg","name":"Pesto Pasta","station":"Pasta"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.key(), "dlg");
    }
}
