//! Session engine — owns the conversation log and the single reply slot.
//!
//! User messages are appended synchronously. The first send while no reply
//! is outstanding hands back a `ReplyJob`; the caller drives it (see
//! `reply::run_reply_job`) and the result lands through `receive_reply` or
//! `fail_reply`. Sends made while a reply is outstanding are appended but
//! start nothing: at most one job is ever in flight.

use chrono::{DateTime, Utc};
use widget_types::{
    WidgetError,
    event::{ReplyTicket, WidgetEvent},
    message::{Message, MessageId, Sender},
    session::SessionId,
};
use crate::event_bus::EventBus;
use crate::ports::ReplyRequest;

/// The outstanding reply job
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub requested_at: DateTime<Utc>,
}

/// A reply the caller must now drive to completion
#[derive(Debug, Clone)]
pub struct ReplyJob {
    pub ticket: ReplyTicket,
    pub request: ReplyRequest,
}

/// What `send_message` did
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// Blank input; nothing changed
    Ignored,
    /// Appended; a reply was already outstanding so no job started
    Appended(MessageId),
    /// Appended and a new reply job started
    Started(MessageId, ReplyJob),
}

impl SendOutcome {
    pub fn into_job(self) -> Option<ReplyJob> {
        match self {
            SendOutcome::Started(_, job) => Some(job),
            _ => None,
        }
    }
}

pub struct SessionEngine {
    id: SessionId,
    messages: Vec<Message>,
    pending: Option<PendingReply>,
    draft: String,
    last_error: Option<WidgetError>,
    next_message_id: u64,
    next_ticket: u64,
    /// Messages before this index have been seen by the user
    read_upto: usize,
    event_bus: EventBus,
}

impl SessionEngine {
    pub fn new(welcome_message: &str, event_bus: EventBus) -> Self {
        Self {
            id: SessionId::new(),
            messages: vec![Message::bot(MessageId(0), welcome_message)],
            pending: None,
            draft: String::new(),
            last_error: None,
            next_message_id: 1,
            next_ticket: 1,
            read_upto: 1,
            event_bus,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending_reply(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    /// Typing indicator: a projection of the pending slot, not separate state
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&WidgetError> {
        self.last_error.as_ref()
    }

    /// Bot messages appended since the user last saw the log
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .skip(self.read_upto)
            .filter(|m| m.sender() == Sender::Bot)
            .count()
    }

    pub fn mark_read(&mut self) {
        self.read_upto = self.messages.len();
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send whatever is in the draft buffer
    pub fn send_draft(&mut self) -> SendOutcome {
        let text = std::mem::take(&mut self.draft);
        let outcome = self.send_message(&text);
        if matches!(outcome, SendOutcome::Ignored) {
            self.draft = text;
        }
        outcome
    }

    pub fn send_message(&mut self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            log::debug!("Ignoring blank message");
            self.event_bus.emit(WidgetEvent::InputIgnored);
            return SendOutcome::Ignored;
        }

        let id = self.append(Sender::User, text);
        self.draft.clear();
        self.last_error = None;

        if let Some(pending) = &self.pending {
            log::debug!(
                "Reply {:?} still outstanding, {} appended without a new job",
                pending.ticket,
                id
            );
            return SendOutcome::Appended(id);
        }

        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(PendingReply {
            ticket,
            requested_at: Utc::now(),
        });
        self.event_bus.emit(WidgetEvent::ReplyStarted { ticket });
        log::info!("Session {}: reply {:?} started", self.id, ticket);

        let job = ReplyJob {
            ticket,
            request: ReplyRequest {
                ticket,
                prompt: text.to_string(),
                history: self.messages.clone(),
            },
        };
        SendOutcome::Started(id, job)
    }

    /// Append the bot's answer and free the reply slot.
    /// Returns `None` when `ticket` is not the outstanding job.
    pub fn receive_reply(&mut self, ticket: ReplyTicket, content: impl Into<String>) -> Option<MessageId> {
        let pending = self.take_pending(ticket)?;
        let id = self.append(Sender::Bot, content);
        self.event_bus.emit(WidgetEvent::ReplyLanded { ticket, id });
        log::info!(
            "Session {}: reply {:?} landed as {} after {}ms",
            self.id,
            ticket,
            id,
            (Utc::now() - pending.requested_at).num_milliseconds()
        );
        Some(id)
    }

    /// Free the reply slot after a failure. Nothing is appended.
    pub fn fail_reply(&mut self, ticket: ReplyTicket, error: WidgetError) {
        if self.take_pending(ticket).is_none() {
            return;
        }
        log::warn!("Session {}: reply {:?} failed: {}", self.id, ticket, error);
        self.event_bus.emit(WidgetEvent::ReplyFailed {
            ticket,
            message: error.to_string(),
        });
        self.last_error = Some(error);
    }

    fn take_pending(&mut self, ticket: ReplyTicket) -> Option<PendingReply> {
        match &self.pending {
            Some(p) if p.ticket == ticket => self.pending.take(),
            Some(p) => {
                log::warn!("Stale reply {:?} ignored, {:?} is outstanding", ticket, p.ticket);
                None
            }
            None => {
                log::warn!("Reply {:?} arrived with no outstanding job", ticket);
                None
            }
        }
    }

    fn append(&mut self, sender: Sender, content: impl Into<String>) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        self.messages.push(Message::new(id, sender, content));
        self.event_bus.emit(WidgetEvent::MessageAppended { id, sender });
        id
    }
}
