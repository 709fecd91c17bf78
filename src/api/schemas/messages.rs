use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct NewMessage {
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

#[derive(Debug, Deserialize)]
pub struct MessageUpdate {
    pub message_text: String,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl From<crate::domain::message::Message> for Message {
    fn from(message: crate::domain::message::Message) -> Self {
        Self {
            message_id: message.message_id,
            posted_by: message.posted_by,
            message_text: message.message_text,
            time_posted_epoch: message.time_posted_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_new_message() {
        let json = r#"{"posted_by": 1, "message_text": "hello", "time_posted_epoch": 1669947792}"#;
        let msg: NewMessage = serde_json::from_str(json).expect("valid payload");
        assert_eq!(msg.posted_by, 1);
        assert_eq!(msg.message_text, "hello");
        assert_eq!(msg.time_posted_epoch, 1_669_947_792);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let msg = Message {
            message_id: 7,
            posted_by: 1,
            message_text: "hello".to_string(),
            time_posted_epoch: 1_669_947_792,
        };
        let value = serde_json::to_value(&msg).expect("serializable");
        assert_eq!(value["message_id"], 7);
        assert_eq!(value["posted_by"], 1);
        assert_eq!(value["message_text"], "hello");
        assert_eq!(value["time_posted_epoch"], 1_669_947_792_i64);
    }
}
