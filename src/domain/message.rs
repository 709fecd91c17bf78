/// A text post owned by an account. `time_posted_epoch` is client-supplied
/// milliseconds since the epoch and is never touched after creation.
#[derive(Debug, Clone)]
pub struct Message {
    pub(crate) message_id: i64,
    pub(crate) posted_by: i64,
    pub(crate) message_text: String,
    pub(crate) time_posted_epoch: i64,
}
