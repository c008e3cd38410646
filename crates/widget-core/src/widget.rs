//! The mounted widget: configuration, presentation state and session in one
//! explicit state container. All user intents enter through `apply`.

use widget_types::{
    config::WidgetConfig,
    event::{Visibility, WidgetEvent},
};
use crate::event_bus::EventBus;
use crate::render::{self, RenderModel};
use crate::session::{ReplyJob, SessionEngine};
use crate::visibility::VisibilityMachine;

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Open,
    Close,
    ToggleMinimize,
    UpdateDraft(String),
    /// Send the current draft
    Send,
    /// Fired by the auto-open timer, not by the user
    AutoOpen,
}

pub struct ChatWidget {
    config: WidgetConfig,
    visibility: VisibilityMachine,
    session: SessionEngine,
    event_bus: EventBus,
}

impl ChatWidget {
    /// Mount a widget. An invalid configuration is not fatal: bad fields
    /// fall back to their defaults so the widget always renders.
    pub fn new(config: WidgetConfig, event_bus: EventBus) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{}; mounting with sanitized config", e);
                config.sanitized()
            }
        };
        let session = SessionEngine::new(&config.content.welcome_message, event_bus.clone());
        log::info!("Widget mounted, session {}", session.id());

        Self {
            config,
            visibility: VisibilityMachine::new(),
            session,
            event_bus,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionEngine {
        &self.session
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.state()
    }

    /// Delay before the scheduled auto-open, if the config asks for one
    pub fn auto_open_delay_ms(&self) -> Option<u64> {
        let behavior = &self.config.behavior;
        behavior
            .auto_open
            .then(|| u64::from(behavior.auto_open_delay_secs) * 1000)
    }

    /// Apply one intent. Returns a reply job when a send starts one; the
    /// caller must drive it (see `reply::run_reply_job`).
    pub fn apply(&mut self, intent: Intent) -> Option<ReplyJob> {
        let before = self.visibility.state();
        let changed = match intent {
            Intent::Open => self.visibility.open(),
            Intent::Close => self.visibility.close(),
            Intent::ToggleMinimize => self.visibility.toggle_minimize(),
            Intent::AutoOpen => self.visibility.auto_open(),
            Intent::UpdateDraft(text) => {
                self.session.update_draft(text);
                return None;
            }
            Intent::Send => {
                let job = self.session.send_draft().into_job();
                self.mark_read_if_open();
                return job;
            }
        };

        if changed {
            let after = self.visibility.state();
            log::debug!("Widget {} -> {}", before.label(), after.label());
            self.event_bus.emit(WidgetEvent::VisibilityChanged { from: before, to: after });
            self.mark_read_if_open();
        }
        None
    }

    /// Land a reply job's result in the session
    pub fn complete(&mut self, job: &ReplyJob, result: widget_types::Result<String>) {
        match result {
            Ok(content) => {
                self.session.receive_reply(job.ticket, content);
            }
            Err(e) => self.session.fail_reply(job.ticket, e),
        }
        self.mark_read_if_open();
    }

    /// The message list is only on screen while fully open
    fn mark_read_if_open(&mut self) {
        if self.visibility.state() == Visibility::Open {
            self.session.mark_read();
        }
    }

    pub fn render(&self) -> RenderModel {
        render::render(self.visibility.state(), &self.session, &self.config)
    }
}
