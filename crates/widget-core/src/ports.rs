//! Port traits — the hexagonal architecture boundary.
//!
//! Defined here in `widget-core` (pure Rust); browser implementations live
//! in `widget-platform`. The core only depends on these traits.

use async_trait::async_trait;
use widget_types::{
    Result,
    event::ReplyTicket,
    message::Message,
};

// ─── Reply Port ──────────────────────────────────────────────

/// A prompt submitted on behalf of the session
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub ticket: ReplyTicket,
    /// The user message that started the job
    pub prompt: String,
    /// Conversation log at the moment the job started
    pub history: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyResponse {
    pub content: String,
}

/// Produces the bot's answer to a prompt: submit, then await a typed
/// result or failure.
#[async_trait(?Send)]
pub trait ReplyPort {
    async fn reply(&self, req: ReplyRequest) -> Result<ReplyResponse>;

    /// Name of this backend (for logging/debug)
    fn name(&self) -> &str;
}

// ─── Timer Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait TimerPort {
    /// Resolve after `ms` milliseconds without blocking the thread
    async fn sleep(&self, ms: u64);
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
