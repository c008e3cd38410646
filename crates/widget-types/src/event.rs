use serde::{Deserialize, Serialize};
use crate::message::{MessageId, Sender};

/// Presentation state of the mounted widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
    OpenMinimized,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Visibility::Closed)
    }

    pub fn label(&self) -> &str {
        match self {
            Visibility::Closed => "closed",
            Visibility::Open => "open",
            Visibility::OpenMinimized => "minimized",
        }
    }
}

/// Identifies one outstanding reply job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplyTicket(pub u64);

/// Events emitted by the widget core.
/// UI drains these each frame for status text and repaint decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// A message was appended to the log
    MessageAppended { id: MessageId, sender: Sender },

    /// A reply job was started for a user message
    ReplyStarted { ticket: ReplyTicket },

    /// The pending reply landed and was appended
    ReplyLanded { ticket: ReplyTicket, id: MessageId },

    /// The pending reply failed or timed out
    ReplyFailed { ticket: ReplyTicket, message: String },

    /// Blank input was dropped without changing state
    InputIgnored,

    /// The presentation state changed
    VisibilityChanged { from: Visibility, to: Visibility },
}
