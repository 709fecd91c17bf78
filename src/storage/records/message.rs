use crate::domain::message::Message;

#[derive(sqlx::FromRow)]
pub(crate) struct MessageRecord {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            message_id: record.message_id,
            posted_by: record.posted_by,
            message_text: record.message_text,
            time_posted_epoch: record.time_posted_epoch,
        }
    }
}
