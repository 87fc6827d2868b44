use super::SqliteStore;
use crate::entities::HelpRequest;
use crate::storage::{StorageError, Store};
use async_trait::async_trait;

#[async_trait]
impl Store<HelpRequest> for SqliteStore {
    async fn list_all(&self) -> Result<Vec<HelpRequest>, StorageError> {
        let requests = sqlx::query_as::<_, HelpRequest>(
            r#"
            SELECT id, requester_email, team_id, table_or_breakout_room,
                   request_time, explanation, solved
            FROM help_requests
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    async fn find_by_key(&self, key: &i64) -> Result<Option<HelpRequest>, StorageError> {
        let request = sqlx::query_as::<_, HelpRequest>(
            r#"
            SELECT id, requester_email, team_id, table_or_breakout_room,
                   request_time, explanation, solved
            FROM help_requests
            WHERE id = ?1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(request)
    }

    async fn save(&self, record: HelpRequest) -> Result<HelpRequest, StorageError> {
        let id = (record.id != 0).then_some(record.id);
        let saved = sqlx::query_as::<_, HelpRequest>(
            r#"
            INSERT INTO help_requests
                (id, requester_email, team_id, table_or_breakout_room, request_time, explanation, solved)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                requester_email = excluded.requester_email,
                team_id = excluded.team_id,
                table_or_breakout_room = excluded.table_or_breakout_room,
                request_time = excluded.request_time,
                explanation = excluded.explanation,
                solved = excluded.solved
            RETURNING id, requester_email, team_id, table_or_breakout_room,
                      request_time, explanation, solved
            "#,
        )
        .bind(id)
        .bind(&record.requester_email)
        .bind(&record.team_id)
        .bind(&record.table_or_breakout_room)
        .bind(record.request_time)
        .bind(&record.explanation)
        .bind(record.solved)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn delete_by_key(&self, key: &i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM help_requests WHERE id = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
