use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Ordering-stable message identifier. The welcome message is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// A single entry in the conversation log.
///
/// Fields are private: once created, a message never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    content: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn bot(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Sender::Bot, content)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
