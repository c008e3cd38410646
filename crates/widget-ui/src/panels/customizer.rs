//! Customizer panel — edits a working copy of the widget configuration.
//! Save and Reset are reported to the app layer, which owns persistence.

use egui::{self, Color32, RichText, Vec2};
use widget_types::config::*;
use crate::state::{CustomizerTab, SaveFeedback};
use crate::theme::*;

/// What the caller should do after rendering the customizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizerAction {
    /// Nothing changed
    None,
    /// A field was changed; the preview keeps the saved config until Save
    Changed,
    SaveClicked,
    ResetClicked,
}

impl CustomizerAction {
    /// Whether the preview widget has to be rebuilt as a new session
    pub fn remounts(self) -> bool {
        matches!(self, CustomizerAction::SaveClicked | CustomizerAction::ResetClicked)
    }
}

/// Fields the embed script reads but the in-app preview cannot show
const STORED_ONLY_HINT: &str = "Applied by the embedded widget only";

pub fn customizer_panel(
    ui: &mut egui::Ui,
    config: &mut WidgetConfig,
    tab: &mut CustomizerTab,
    save_feedback: Option<&SaveFeedback>,
) -> CustomizerAction {
    let mut changed = false;
    let mut save_clicked = false;
    let mut reset_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Widget Configurator").color(TEXT_PRIMARY));
            ui.label(
                RichText::new("Customize how your chat widget looks and behaves")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.separator();

            ui.horizontal(|ui| {
                for t in CustomizerTab::all() {
                    ui.selectable_value(tab, *t, t.label());
                }
            });
            ui.add_space(6.0);

            changed |= match tab {
                CustomizerTab::Appearance => appearance(ui, config),
                CustomizerTab::Behavior => behavior(ui, &mut config.behavior),
                CustomizerTab::Content => content(ui, config),
            };

            ui.add_space(12.0);
            ui.separator();

            if let Err(e) = config.validate() {
                ui.label(RichText::new(e.to_string()).color(ERROR).small());
            }

            ui.horizontal(|ui| {
                let save = ui.add(
                    egui::Button::new(RichText::new("Save Changes").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 28.0)),
                );
                save_clicked = save.clicked();
                reset_clicked = ui.button("Reset").clicked();

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if save_clicked {
        CustomizerAction::SaveClicked
    } else if reset_clicked {
        CustomizerAction::ResetClicked
    } else if changed {
        CustomizerAction::Changed
    } else {
        CustomizerAction::None
    }
}

fn appearance(ui: &mut egui::Ui, config: &mut WidgetConfig) -> bool {
    let mut changed = false;

    section(ui, "Colors");
    changed |= color_row(ui, "Primary", &mut config.colors.primary, true);
    changed |= color_row(ui, "Secondary", &mut config.colors.secondary, false);
    changed |= color_row(ui, "Background", &mut config.colors.background, false);
    changed |= color_row(ui, "Text", &mut config.colors.text, false);

    section(ui, "Position");
    egui::ComboBox::from_id_salt("widget_position")
        .selected_text(config.position.label())
        .show_ui(ui, |ui| {
            for p in WidgetPosition::all() {
                changed |= ui.selectable_value(&mut config.position, *p, p.label()).changed();
            }
        });

    section(ui, "Size");
    changed |= slider(ui, "Width", &mut config.size.width, WIDTH_RANGE);
    changed |= slider(ui, "Height", &mut config.size.height, HEIGHT_RANGE);
    changed |= slider(ui, "Border radius", &mut config.border_radius, BORDER_RADIUS_RANGE);
    changed |= slider(ui, "Chat icon size", &mut config.chat_icon_size, ICON_SIZE_RANGE);

    section(ui, "Typography");
    ui.label(RichText::new("Font family").color(TEXT_SECONDARY).small());
    changed |= ui.text_edit_singleline(&mut config.typography.font_family).changed();
    stored_only(ui);
    changed |= slider(ui, "Font size", &mut config.typography.font_size, FONT_SIZE_RANGE);

    changed
}

fn behavior(ui: &mut egui::Ui, behavior: &mut Behavior) -> bool {
    let mut changed = false;

    section(ui, "Opening");
    changed |= ui.checkbox(&mut behavior.auto_open, "Open automatically").changed();
    ui.add_enabled_ui(behavior.auto_open, |ui| {
        changed |= slider(
            ui,
            "Delay (seconds)",
            &mut behavior.auto_open_delay_secs,
            0..=AUTO_OPEN_DELAY_MAX_SECS,
        );
    });

    section(ui, "Feedback");
    changed |= ui.checkbox(&mut behavior.sound_effects, "Sound effects").changed();
    stored_only(ui);
    changed |= ui
        .checkbox(&mut behavior.show_notifications, "Show notifications")
        .on_hover_text("Unread badge on the closed or minimized widget")
        .changed();

    section(ui, "Replies");
    changed |= slider(ui, "Reply delay (ms)", &mut behavior.reply_delay_ms, 0..=REPLY_DELAY_MAX_MS);
    changed |= slider(ui, "Reply timeout (ms)", &mut behavior.reply_timeout_ms, 1_000..=REPLY_TIMEOUT_MAX_MS);

    changed
}

fn content(ui: &mut egui::Ui, config: &mut WidgetConfig) -> bool {
    let mut changed = false;

    section(ui, "Header");
    changed |= text_row(ui, "Title", &mut config.title);
    changed |= text_row(ui, "Bot name", &mut config.bot_name);
    changed |= text_row(ui, "Bot avatar URL", &mut config.bot_avatar);
    changed |= text_row(ui, "User avatar URL", &mut config.user_avatar);

    section(ui, "Messages");
    ui.label(RichText::new("Welcome message").color(TEXT_SECONDARY).small());
    changed |= ui
        .add(egui::TextEdit::multiline(&mut config.content.welcome_message).desired_rows(2))
        .changed();
    changed |= text_row(ui, "Input placeholder", &mut config.content.input_placeholder);

    changed
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).color(ACCENT).strong());
    ui.add_space(2.0);
}

fn stored_only(ui: &mut egui::Ui) {
    ui.label(RichText::new(STORED_ONLY_HINT).color(TEXT_SECONDARY).small().italics());
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.text_edit_singleline(value).changed()
}

fn slider<T: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: std::ops::RangeInclusive<T>,
) -> bool {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.add(egui::Slider::new(value, range)).changed()
}

fn color_row(ui: &mut egui::Ui, label: &str, value: &mut String, presets: bool) -> bool {
    let mut changed = false;
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.horizontal(|ui| {
        let valid = parse_hex_color(value).is_some();
        let swatch = color_from_hex(value, Color32::TRANSPARENT);
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(18.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 3.0, swatch);

        let text_color = if valid { TEXT_PRIMARY } else { ERROR };
        changed |= ui
            .add(
                egui::TextEdit::singleline(value)
                    .desired_width(80.0)
                    .text_color(text_color),
            )
            .changed();

        if presets {
            for preset in COLOR_PRESETS {
                let fill = color_from_hex(preset, Color32::TRANSPARENT);
                let btn = egui::Button::new("")
                    .fill(fill)
                    .min_size(Vec2::splat(16.0))
                    .corner_radius(egui::CornerRadius::same(u8::MAX));
                if ui.add(btn).on_hover_text(*preset).clicked() {
                    *value = (*preset).to_string();
                    changed = true;
                }
            }
        }
    });
    changed
}

