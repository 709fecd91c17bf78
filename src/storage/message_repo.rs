use crate::domain::message::Message;
use crate::error::Result;
use crate::storage::DbPool;
use crate::storage::records::message::MessageRecord;

#[derive(Clone, Debug)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, posted_by: i64, message_text: &str, time_posted_epoch: i64) -> Result<Message> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            INSERT INTO message (posted_by, message_text, time_posted_epoch)
            VALUES (?, ?, ?)
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(posted_by)
        .bind(message_text)
        .bind(time_posted_epoch)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    pub async fn fetch_all(&self) -> Result<Vec<Message>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM message
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, message_id: i64) -> Result<Option<Message>> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM message
            WHERE message_id = ?
            "#,
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    /// Deletes a message, returning the row as it was before deletion.
    pub async fn delete(&self, message_id: i64) -> Result<Option<Message>> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            DELETE FROM message
            WHERE message_id = ?
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    pub async fn update_text(&self, message_id: i64, message_text: &str) -> Result<Option<Message>> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            UPDATE message
            SET message_text = ?
            WHERE message_id = ?
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(message_text)
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    pub async fn fetch_by_account(&self, account_id: i64) -> Result<Vec<Message>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM message
            WHERE posted_by = ?
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
