//! UI theme constants and widget colour conversion

use egui::{Color32, CornerRadius, Stroke, Vec2};
use widget_types::config::{parse_hex_color, ColorScheme};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(24, 24, 27);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(39, 39, 42);
pub const BG_SURFACE: Color32 = Color32::from_rgb(52, 52, 56);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 228, 231);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(161, 161, 170);
pub const ACCENT: Color32 = Color32::from_rgb(79, 70, 229);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const MUTED_BUBBLE: Color32 = Color32::from_rgb(241, 241, 244);
pub const TYPING_DOT: Color32 = Color32::from_rgb(156, 163, 175);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const WIDGET_MARGIN: f32 = 16.0;

/// Preset swatches offered by the customizer
pub const COLOR_PRESETS: &[&str] = &[
    "#4f46e5", "#22c55e", "#ef4444", "#f59e0b", "#6366f1", "#000000", "#7c3aed",
];

/// Convert a configured hex colour, falling back when it does not parse
pub fn color_from_hex(hex: &str, fallback: Color32) -> Color32 {
    parse_hex_color(hex).map_or(fallback, |[r, g, b]| Color32::from_rgb(r, g, b))
}

/// Widget colours resolved for painting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetPalette {
    pub primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub text: Color32,
}

impl WidgetPalette {
    pub fn from_scheme(colors: &ColorScheme) -> Self {
        Self {
            primary: color_from_hex(&colors.primary, ACCENT),
            secondary: color_from_hex(&colors.secondary, Color32::WHITE),
            background: color_from_hex(&colors.background, Color32::WHITE),
            text: color_from_hex(&colors.text, Color32::from_rgb(31, 41, 55)),
        }
    }
}

/// Apply the dark dashboard theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
