use super::SqliteStore;
use crate::entities::MenuItem;
use crate::storage::{StorageError, Store};
use async_trait::async_trait;

#[async_trait]
impl Store<MenuItem> for SqliteStore {
    async fn list_all(&self) -> Result<Vec<MenuItem>, StorageError> {
        let items = sqlx::query_as::<_, MenuItem>(
            "SELECT id, dining_commons_code, name, station FROM ucsb_dining_commons_menu_items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn find_by_key(&self, key: &String) -> Result<Option<MenuItem>, StorageError> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, dining_commons_code, name, station
            FROM ucsb_dining_commons_menu_items
            WHERE dining_commons_code = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    // The surrogate id is owned by the table: a new code gets the next
    // AUTOINCREMENT value, an existing code keeps its row id.
    async fn save(&self, record: MenuItem) -> Result<MenuItem, StorageError> {
        let saved = sqlx::query_as::<_, MenuItem>(
            r#"
            INSERT INTO ucsb_dining_commons_menu_items (dining_commons_code, name, station)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(dining_commons_code) DO UPDATE SET
                name = excluded.name,
                station = excluded.station
            RETURNING id, dining_commons_code, name, station
            "#,
        )
        .bind(&record.dining_commons_code)
        .bind(&record.name)
        .bind(&record.station)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_key(&self, key: &String) -> Result<bool, StorageError> {
        let result =
            sqlx::query("DELETE FROM ucsb_dining_commons_menu_items WHERE dining_commons_code = ?1")
                .bind(key)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
