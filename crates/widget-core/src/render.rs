//! Render model adapter.
//!
//! `render` is a pure projection of (visibility, session, config) into an
//! immutable structure the view layer draws from. Nothing here mutates.

use widget_types::{
    config::{ColorScheme, WidgetConfig, WidgetPosition, WidgetSize},
    event::Visibility,
    message::{Message, MessageId, Sender},
};
use crate::session::SessionEngine;

pub const STATUS_TYPING: &str = "Typing...";
pub const STATUS_ONLINE: &str = "Online";
pub const USER_DISPLAY_NAME: &str = "You";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub visibility: Visibility,
    pub position: WidgetPosition,
    pub colors: ColorScheme,
    pub size: WidgetSize,
    pub border_radius: u8,
    pub font_size: u8,
    /// Chat bubble shown while closed
    pub launcher: Option<LauncherView>,
    /// Card shown while open or minimized
    pub panel: Option<PanelView>,
    /// Changes whenever the view should scroll to the newest content
    pub scroll_key: ScrollKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LauncherView {
    pub icon_size: u8,
    /// Unread badge; 0 when notifications are off
    pub unread: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub header: HeaderView,
    /// Absent while minimized
    pub body: Option<BodyView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: String,
    pub bot_name: String,
    pub bot_avatar: String,
    pub avatar_initial: char,
    pub status: &'static str,
    pub minimized: bool,
    /// Unread badge while minimized
    pub unread: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub messages: Vec<MessageView>,
    pub typing_indicator: bool,
    pub error: Option<String>,
    pub input: InputView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub id: MessageId,
    pub sender: Sender,
    pub display_name: String,
    pub avatar: String,
    pub avatar_initial: char,
    pub align: Align,
    pub content: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub placeholder: String,
    pub draft: String,
    pub enabled: bool,
    pub send_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScrollKey {
    pub message_count: usize,
    pub typing: bool,
}

pub fn render(visibility: Visibility, session: &SessionEngine, config: &WidgetConfig) -> RenderModel {
    let typing = session.is_typing();
    let bot_initial = initial(&config.bot_name);
    let unread = if config.behavior.show_notifications {
        session.unread_count()
    } else {
        0
    };

    let launcher = (!visibility.is_visible()).then(|| LauncherView {
        icon_size: config.chat_icon_size,
        unread,
    });

    let panel = match visibility {
        Visibility::Closed => None,
        Visibility::Open | Visibility::OpenMinimized => {
            let minimized = visibility == Visibility::OpenMinimized;
            let header = HeaderView {
                title: config.title.clone(),
                bot_name: config.bot_name.clone(),
                bot_avatar: config.bot_avatar.clone(),
                avatar_initial: bot_initial,
                status: if typing { STATUS_TYPING } else { STATUS_ONLINE },
                minimized,
                unread: if minimized { unread } else { 0 },
            };
            let body = (!minimized).then(|| BodyView {
                messages: session
                    .messages()
                    .iter()
                    .map(|m| message_view(m, config, bot_initial))
                    .collect(),
                typing_indicator: typing,
                error: session.last_error().map(|e| e.to_string()),
                input: InputView {
                    placeholder: config.content.input_placeholder.clone(),
                    draft: session.draft().to_string(),
                    enabled: true,
                    send_enabled: !session.draft().trim().is_empty(),
                },
            });
            Some(PanelView { header, body })
        }
    };

    RenderModel {
        visibility,
        position: config.position,
        colors: config.colors.clone(),
        size: config.size,
        border_radius: config.border_radius,
        font_size: config.typography.font_size,
        launcher,
        panel,
        scroll_key: ScrollKey {
            message_count: session.messages().len(),
            typing,
        },
    }
}

fn message_view(msg: &Message, config: &WidgetConfig, bot_initial: char) -> MessageView {
    let (display_name, avatar, avatar_initial, align) = match msg.sender() {
        Sender::User => (USER_DISPLAY_NAME, &config.user_avatar, 'U', Align::End),
        Sender::Bot => (config.bot_name.as_str(), &config.bot_avatar, bot_initial, Align::Start),
    };
    MessageView {
        id: msg.id(),
        sender: msg.sender(),
        display_name: display_name.to_string(),
        avatar: avatar.clone(),
        avatar_initial,
        align,
        content: msg.content().to_string(),
        time_label: time_label(msg),
    }
}

/// `HH:MM` in the viewer's local time
pub fn time_label(msg: &Message) -> String {
    msg.timestamp()
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string()
}

fn initial(name: &str) -> char {
    name.chars().next().unwrap_or('?')
}

impl RenderModel {
    pub fn is_typing(&self) -> bool {
        self.scroll_key.typing
    }

    pub fn body(&self) -> Option<&BodyView> {
        self.panel.as_ref().and_then(|p| p.body.as_ref())
    }
}
