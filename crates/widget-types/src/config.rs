use serde::{Deserialize, Serialize};
use crate::error::WidgetError;
use crate::Result;

/// Widget configuration produced by the customizer.
/// Immutable for the lifetime of a session; a change means a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
    pub bot_name: String,
    pub bot_avatar: String,
    pub user_avatar: String,
    pub colors: ColorScheme,
    pub position: WidgetPosition,
    pub size: WidgetSize,
    pub typography: Typography,
    pub behavior: Behavior,
    pub content: ContentConfig,
    pub border_radius: u8,
    pub chat_icon_size: u8,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Chat Support".to_string(),
            bot_name: "AI Assistant".to_string(),
            bot_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=assistant".to_string(),
            user_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=user".to_string(),
            colors: ColorScheme::default(),
            position: WidgetPosition::BottomRight,
            size: WidgetSize::default(),
            typography: Typography::default(),
            behavior: Behavior::default(),
            content: ContentConfig::default(),
            border_radius: 8,
            chat_icon_size: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#4f46e5".to_string(),
            secondary: "#ffffff".to_string(),
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
        }
    }
}

/// Screen corner the widget is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl WidgetPosition {
    pub fn all() -> &'static [WidgetPosition] {
        &[
            WidgetPosition::BottomRight,
            WidgetPosition::BottomLeft,
            WidgetPosition::TopRight,
            WidgetPosition::TopLeft,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            WidgetPosition::BottomRight => "Bottom Right",
            WidgetPosition::BottomLeft => "Bottom Left",
            WidgetPosition::TopRight => "Top Right",
            WidgetPosition::TopLeft => "Top Left",
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(self, WidgetPosition::TopRight | WidgetPosition::TopLeft)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, WidgetPosition::BottomLeft | WidgetPosition::TopLeft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSize {
    pub width: u16,
    pub height: u16,
}

impl Default for WidgetSize {
    fn default() -> Self {
        Self { width: 350, height: 500 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub font_family: String,
    pub font_size: u8,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_size: 14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    pub auto_open: bool,
    pub auto_open_delay_secs: u32,
    pub sound_effects: bool,
    pub show_notifications: bool,
    /// Simulated latency between a user message and the bot reply
    pub reply_delay_ms: u32,
    pub reply_timeout_ms: u32,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            auto_open: false,
            auto_open_delay_secs: 5,
            sound_effects: true,
            show_notifications: true,
            reply_delay_ms: 1500,
            reply_timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub welcome_message: String,
    pub input_placeholder: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            welcome_message: "Hello! How can I help you today?".to_string(),
            input_placeholder: "Type your message here...".to_string(),
        }
    }
}

pub const WIDTH_RANGE: std::ops::RangeInclusive<u16> = 250..=600;
pub const HEIGHT_RANGE: std::ops::RangeInclusive<u16> = 300..=800;
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<u8> = 10..=24;
pub const BORDER_RADIUS_RANGE: std::ops::RangeInclusive<u8> = 0..=24;
pub const ICON_SIZE_RANGE: std::ops::RangeInclusive<u8> = 24..=80;
pub const AUTO_OPEN_DELAY_MAX_SECS: u32 = 60;
pub const REPLY_DELAY_MAX_MS: u32 = 60_000;
pub const REPLY_TIMEOUT_MAX_MS: u32 = 120_000;

/// Parse `#rrggbb` or `#rgb` into RGB components.
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(rgb)
        }
        _ => None,
    }
}

impl WidgetConfig {
    /// Check every field; reports the first invalid one.
    pub fn validate(&self) -> Result<()> {
        self.problems().into_iter().next().map_or(Ok(()), Err)
    }

    /// Copy of this configuration with every invalid field reset to its default.
    pub fn sanitized(&self) -> Self {
        let defaults = WidgetConfig::default();
        let mut out = self.clone();

        for error in self.problems() {
            let WidgetError::ConfigurationInvalid { field, .. } = error else {
                continue;
            };
            log::warn!("Widget config field '{}' invalid, using default", field);
            match field.as_str() {
                "title" => out.title = defaults.title.clone(),
                "bot_name" => out.bot_name = defaults.bot_name.clone(),
                "colors.primary" => out.colors.primary = defaults.colors.primary.clone(),
                "colors.secondary" => out.colors.secondary = defaults.colors.secondary.clone(),
                "colors.background" => out.colors.background = defaults.colors.background.clone(),
                "colors.text" => out.colors.text = defaults.colors.text.clone(),
                "size.width" => out.size.width = defaults.size.width,
                "size.height" => out.size.height = defaults.size.height,
                "typography.font_size" => out.typography.font_size = defaults.typography.font_size,
                "border_radius" => out.border_radius = defaults.border_radius,
                "chat_icon_size" => out.chat_icon_size = defaults.chat_icon_size,
                "behavior.auto_open_delay_secs" => {
                    out.behavior.auto_open_delay_secs = defaults.behavior.auto_open_delay_secs
                }
                "behavior.reply_delay_ms" => {
                    out.behavior.reply_delay_ms = defaults.behavior.reply_delay_ms
                }
                "behavior.reply_timeout_ms" => {
                    out.behavior.reply_timeout_ms = defaults.behavior.reply_timeout_ms
                }
                _ => {}
            }
        }
        if out.behavior.reply_timeout_ms <= out.behavior.reply_delay_ms {
            out.behavior.reply_timeout_ms = out
                .behavior
                .reply_delay_ms
                .saturating_add(defaults.behavior.reply_timeout_ms);
        }
        out
    }

    fn problems(&self) -> Vec<WidgetError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(WidgetError::invalid("title", "must not be empty"));
        }
        if self.bot_name.trim().is_empty() {
            errors.push(WidgetError::invalid("bot_name", "must not be empty"));
        }

        let colors = [
            ("colors.primary", &self.colors.primary),
            ("colors.secondary", &self.colors.secondary),
            ("colors.background", &self.colors.background),
            ("colors.text", &self.colors.text),
        ];
        for (field, value) in colors {
            if parse_hex_color(value).is_none() {
                errors.push(WidgetError::invalid(
                    field,
                    format!("'{}' is not a hex color", value),
                ));
            }
        }

        if !WIDTH_RANGE.contains(&self.size.width) {
            errors.push(WidgetError::invalid("size.width", out_of_range(self.size.width, &WIDTH_RANGE)));
        }
        if !HEIGHT_RANGE.contains(&self.size.height) {
            errors.push(WidgetError::invalid("size.height", out_of_range(self.size.height, &HEIGHT_RANGE)));
        }
        if !FONT_SIZE_RANGE.contains(&self.typography.font_size) {
            errors.push(WidgetError::invalid(
                "typography.font_size",
                out_of_range(self.typography.font_size, &FONT_SIZE_RANGE),
            ));
        }
        if !BORDER_RADIUS_RANGE.contains(&self.border_radius) {
            errors.push(WidgetError::invalid(
                "border_radius",
                out_of_range(self.border_radius, &BORDER_RADIUS_RANGE),
            ));
        }
        if !ICON_SIZE_RANGE.contains(&self.chat_icon_size) {
            errors.push(WidgetError::invalid(
                "chat_icon_size",
                out_of_range(self.chat_icon_size, &ICON_SIZE_RANGE),
            ));
        }
        if self.behavior.auto_open_delay_secs > AUTO_OPEN_DELAY_MAX_SECS {
            errors.push(WidgetError::invalid(
                "behavior.auto_open_delay_secs",
                format!("must be at most {}", AUTO_OPEN_DELAY_MAX_SECS),
            ));
        }
        if self.behavior.reply_delay_ms > REPLY_DELAY_MAX_MS {
            errors.push(WidgetError::invalid(
                "behavior.reply_delay_ms",
                format!("must be at most {}", REPLY_DELAY_MAX_MS),
            ));
        }
        if self.behavior.reply_timeout_ms > REPLY_TIMEOUT_MAX_MS {
            errors.push(WidgetError::invalid(
                "behavior.reply_timeout_ms",
                format!("must be at most {}", REPLY_TIMEOUT_MAX_MS),
            ));
        } else if self.behavior.reply_timeout_ms <= self.behavior.reply_delay_ms {
            errors.push(WidgetError::invalid(
                "behavior.reply_timeout_ms",
                "must be greater than the reply delay",
            ));
        }

        errors
    }
}

fn out_of_range<T: std::fmt::Display>(value: T, range: &std::ops::RangeInclusive<T>) -> String {
    format!("{} outside {}..={}", value, range.start(), range.end())
}
