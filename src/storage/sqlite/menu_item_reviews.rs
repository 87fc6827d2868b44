use super::SqliteStore;
use crate::entities::MenuItemReview;
use crate::storage::{StorageError, Store};
use async_trait::async_trait;

#[async_trait]
impl Store<MenuItemReview> for SqliteStore {
    async fn list_all(&self) -> Result<Vec<MenuItemReview>, StorageError> {
        let reviews = sqlx::query_as::<_, MenuItemReview>(
            r#"
            SELECT id, item_id, reviewer_email, stars, date_reviewed, comments
            FROM menu_item_reviews
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    async fn find_by_key(&self, key: &i64) -> Result<Option<MenuItemReview>, StorageError> {
        let review = sqlx::query_as::<_, MenuItemReview>(
            r#"
            SELECT id, item_id, reviewer_email, stars, date_reviewed, comments
            FROM menu_item_reviews
            WHERE id = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(review)
    }

    // A NULL id lets AUTOINCREMENT pick the next key.
    async fn save(&self, record: MenuItemReview) -> Result<MenuItemReview, StorageError> {
        let id = (record.id != 0).then_some(record.id);
        let saved = sqlx::query_as::<_, MenuItemReview>(
            r#"
            INSERT INTO menu_item_reviews (id, item_id, reviewer_email, stars, date_reviewed, comments)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                item_id = excluded.item_id,
                reviewer_email = excluded.reviewer_email,
                stars = excluded.stars,
                date_reviewed = excluded.date_reviewed,
                comments = excluded.comments
            RETURNING id, item_id, reviewer_email, stars, date_reviewed, comments
            "#,
        )
        .bind(id)
        .bind(record.item_id)
        .bind(&record.reviewer_email)
        .bind(record.stars)
        .bind(record.date_reviewed)
        .bind(&record.comments)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_key(&self, key: &i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM menu_item_reviews WHERE id = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
