//! Persisted conversation messages

use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person asking
    User,
    /// The composed answer
    Krishna,
}

/// Teaching metadata attached to an answer message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMeta {
    pub chapter: String,
    pub reference: String,
}

/// One line of conversation history, stored as JSONL by the message store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MessageMeta>,
    /// Unix timestamp (seconds)
    pub timestamp: i64,
}

impl Message {
    /// Build the inbound half of an exchange.
    pub fn user(content: impl Into<String>, conversation_id: Option<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            conversation_id,
            image_url: None,
            meta: None,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// Build the answer half of an exchange, carrying the teaching metadata.
    pub fn answer(
        content: impl Into<String>,
        conversation_id: Option<String>,
        image_url: impl Into<String>,
        meta: MessageMeta,
    ) -> Self {
        Self {
            role: Role::Krishna,
            content: content.into(),
            conversation_id,
            image_url: Some(image_url.into()),
            meta: Some(meta),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
