//! UI-level state that is not part of the widget core: which dashboard view
//! is showing, status text, feedback flags. Updated each frame by draining
//! the EventBus.

use widget_core::embed::{EmbedCode, EmbedKind};
use widget_core::render::ScrollKey;
use widget_types::event::WidgetEvent;

/// How long the "Copied!" confirmation stays up, in seconds
pub const COPIED_FEEDBACK_SECS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Preview,
    Customize,
    Embed,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Preview, View::Customize, View::Embed]
    }

    pub fn label(&self) -> &str {
        match self {
            View::Preview => "Preview",
            View::Customize => "Customize",
            View::Embed => "Embed Code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizerTab {
    Appearance,
    Behavior,
    Content,
}

impl CustomizerTab {
    pub fn all() -> &'static [CustomizerTab] {
        &[CustomizerTab::Appearance, CustomizerTab::Behavior, CustomizerTab::Content]
    }

    pub fn label(&self) -> &str {
        match self {
            CustomizerTab::Appearance => "Appearance",
            CustomizerTab::Behavior => "Behavior",
            CustomizerTab::Content => "Content",
        }
    }
}

/// Save feedback passed in from the app layer
#[derive(Debug, Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// State visible to UI panels
pub struct UiState {
    pub view: View,
    pub customizer_tab: CustomizerTab,
    /// A reply is in flight
    pub busy: bool,
    /// Status line text
    pub status_text: String,
    pub save_feedback: Option<SaveFeedback>,
    pub embed: EmbedCode,
    pub embed_kind: EmbedKind,
    /// egui time until which the copy confirmation shows
    copied_until: Option<f64>,
    /// Last scroll key the message list was scrolled for
    last_scroll_key: Option<ScrollKey>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            view: View::Preview,
            customizer_tab: CustomizerTab::Appearance,
            busy: false,
            status_text: "Ready".to_string(),
            save_feedback: None,
            embed: EmbedCode::default(),
            embed_kind: EmbedKind::Script,
            copied_until: None,
            last_scroll_key: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<WidgetEvent>) {
        for event in events {
            match event {
                WidgetEvent::ReplyStarted { .. } => {
                    self.busy = true;
                    self.status_text = "Typing...".to_string();
                }
                WidgetEvent::ReplyLanded { .. } => {
                    self.busy = false;
                    self.status_text = "Ready".to_string();
                }
                WidgetEvent::ReplyFailed { message, .. } => {
                    self.busy = false;
                    self.status_text = format!("Error: {}", message);
                }
                WidgetEvent::VisibilityChanged { to, .. } => {
                    if !self.busy {
                        self.status_text = format!("Widget {}", to.label());
                    }
                }
                WidgetEvent::MessageAppended { .. } | WidgetEvent::InputIgnored => {}
            }
        }
    }

    /// Post-render scroll hook: true exactly once per new scroll key.
    pub fn take_scroll(&mut self, key: ScrollKey) -> bool {
        if self.last_scroll_key == Some(key) {
            return false;
        }
        self.last_scroll_key = Some(key);
        true
    }

    /// Forget the scroll position, e.g. after remounting the widget
    pub fn reset_scroll(&mut self) {
        self.last_scroll_key = None;
    }

    pub fn mark_copied(&mut self, now: f64) {
        self.copied_until = Some(now + COPIED_FEEDBACK_SECS);
    }

    pub fn is_copied(&self, now: f64) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    pub fn select_embed(&mut self, kind: EmbedKind) {
        self.embed_kind = kind;
        self.copied_until = None;
    }

    pub fn embed_code(&self) -> String {
        self.embed.code_for(self.embed_kind)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
