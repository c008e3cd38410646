//! Chat widget panel — draws a `RenderModel` anchored to its configured
//! corner and turns clicks and keystrokes into intents.

use egui::{self, Align, Align2, Color32, CornerRadius, Layout, RichText, ScrollArea, Vec2};
use widget_core::render::{Align as MsgAlign, BodyView, HeaderView, MessageView, RenderModel};
use widget_core::Intent;
use widget_types::config::WidgetPosition;
use crate::state::UiState;
use crate::theme::*;

const HEADER_HEIGHT: f32 = 56.0;
const INPUT_HEIGHT: f32 = 44.0;

/// Render the widget. Returns the intents produced this frame, in order.
pub fn widget_panel(ctx: &egui::Context, model: &RenderModel, state: &mut UiState) -> Vec<Intent> {
    let mut intents = Vec::new();
    let palette = WidgetPalette::from_scheme(&model.colors);
    let (anchor, offset) = anchor_for(model.position);

    egui::Area::new(egui::Id::new("chat_widget"))
        .anchor(anchor, offset)
        .show(ctx, |ui| {
            if let Some(launcher) = &model.launcher {
                let size = f32::from(launcher.icon_size) + 16.0;
                let bubble = egui::Button::new(
                    RichText::new("💬").size(f32::from(launcher.icon_size) * 0.6).color(palette.secondary),
                )
                .fill(palette.primary)
                .corner_radius(CornerRadius::same(u8::MAX))
                .min_size(Vec2::splat(size));
                let response = ui.add(bubble);
                if launcher.unread > 0 {
                    unread_badge(ui, response.rect.right_top(), launcher.unread);
                }
                if response.clicked() {
                    intents.push(Intent::Open);
                }
                return;
            }

            let Some(panel) = &model.panel else {
                return;
            };
            let radius = CornerRadius::same(model.border_radius);
            let width = f32::from(model.size.width);

            egui::Frame::default()
                .fill(palette.background)
                .corner_radius(radius)
                .stroke(egui::Stroke::new(1.0, BG_SURFACE))
                .show(ui, |ui| {
                    ui.set_width(width);
                    header(ui, &panel.header, &palette, radius, &mut intents);
                    if let Some(body) = &panel.body {
                        let height = f32::from(model.size.height) - HEADER_HEIGHT - INPUT_HEIGHT;
                        messages(ui, body, &palette, model, height, state);
                        input_row(ui, body, &palette, &mut intents);
                    }
                });
        });

    intents
}

fn anchor_for(position: WidgetPosition) -> (Align2, Vec2) {
    let x = if position.is_left() { WIDGET_MARGIN } else { -WIDGET_MARGIN };
    let y = if position.is_top() { WIDGET_MARGIN } else { -WIDGET_MARGIN };
    let anchor = match position {
        WidgetPosition::BottomRight => Align2::RIGHT_BOTTOM,
        WidgetPosition::BottomLeft => Align2::LEFT_BOTTOM,
        WidgetPosition::TopRight => Align2::RIGHT_TOP,
        WidgetPosition::TopLeft => Align2::LEFT_TOP,
    };
    (anchor, Vec2::new(x, y))
}

fn header(
    ui: &mut egui::Ui,
    header: &HeaderView,
    palette: &WidgetPalette,
    radius: CornerRadius,
    intents: &mut Vec<Intent>,
) {
    egui::Frame::default()
        .fill(palette.primary)
        .corner_radius(radius)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_min_height(HEADER_HEIGHT - 2.0 * PANEL_PADDING.y);
            ui.horizontal(|ui| {
                avatar(ui, header.avatar_initial, palette.secondary, palette.primary)
                    .on_hover_text(header.bot_name.as_str());
                ui.vertical(|ui| {
                    ui.label(RichText::new(&header.title).color(palette.secondary).strong());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(header.status).color(palette.secondary).small());
                        if header.unread > 0 {
                            ui.label(
                                RichText::new(format!("· {} new", header.unread))
                                    .color(palette.secondary)
                                    .small()
                                    .strong(),
                            );
                        }
                    });
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .small_button(RichText::new("✕").color(palette.secondary))
                        .on_hover_text("Close")
                        .clicked()
                    {
                        intents.push(Intent::Close);
                    }
                    let (icon, hint) = if header.minimized {
                        ("🗖", "Maximize")
                    } else {
                        ("🗕", "Minimize")
                    };
                    if ui
                        .small_button(RichText::new(icon).color(palette.secondary))
                        .on_hover_text(hint)
                        .clicked()
                    {
                        intents.push(Intent::ToggleMinimize);
                    }
                });
            });
        });
}

fn messages(
    ui: &mut egui::Ui,
    body: &BodyView,
    palette: &WidgetPalette,
    model: &RenderModel,
    height: f32,
    state: &mut UiState,
) {
    let font_size = f32::from(model.font_size);
    ScrollArea::vertical()
        .max_height(height.max(80.0))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            for msg in &body.messages {
                message_bubble(ui, msg, palette, font_size);
                ui.add_space(6.0);
            }

            if body.typing_indicator {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let t = ui.input(|i| i.time);
                    let dots: String = (0..3)
                        .map(|i| if ((t * 3.0) as usize + i) % 3 == 0 { '●' } else { '·' })
                        .collect();
                    ui.label(RichText::new(dots).color(TYPING_DOT).size(font_size + 4.0));
                });
                ui.ctx().request_repaint();
            }

            if let Some(error) = &body.error {
                ui.label(RichText::new(error).color(ERROR).small());
            }

            if state.take_scroll(model.scroll_key) {
                ui.scroll_to_cursor(Some(Align::BOTTOM));
            }
        });
}

fn message_bubble(ui: &mut egui::Ui, msg: &MessageView, palette: &WidgetPalette, font_size: f32) {
    let (layout, fill, text) = match msg.align {
        MsgAlign::End => (Layout::right_to_left(Align::TOP), palette.primary, palette.secondary),
        MsgAlign::Start => (Layout::left_to_right(Align::TOP), MUTED_BUBBLE, palette.text),
    };
    let max_width = ui.available_width() * 0.8;

    ui.with_layout(layout, |ui| {
        ui.add_space(8.0);
        avatar(ui, msg.avatar_initial, palette.primary, palette.secondary)
            .on_hover_text(msg.display_name.as_str());
        egui::Frame::default()
            .fill(fill)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&msg.content).color(text).size(font_size));
                    ui.label(RichText::new(&msg.time_label).color(text.gamma_multiply(0.7)).small());
                });
            });
    });
}

fn unread_badge(ui: &egui::Ui, center: egui::Pos2, count: usize) {
    let label = if count > 9 { "9+".to_string() } else { count.to_string() };
    let painter = ui.painter();
    painter.circle_filled(center, 9.0, ERROR);
    painter.text(
        center,
        Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(11.0),
        Color32::WHITE,
    );
}

fn avatar(ui: &mut egui::Ui, initial: char, fill: Color32, text: Color32) -> egui::Response {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(u8::MAX))
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.label(RichText::new(initial.to_string()).color(text).strong());
        })
        .response
}

fn input_row(ui: &mut egui::Ui, body: &BodyView, palette: &WidgetPalette, intents: &mut Vec<Intent>) {
    let input = &body.input;
    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut draft = input.draft.clone();
                let edit = egui::TextEdit::singleline(&mut draft)
                    .hint_text(input.placeholder.as_str())
                    .desired_width(ui.available_width() - 48.0);
                let response = ui.add_enabled(input.enabled, edit);
                if response.changed() {
                    intents.push(Intent::UpdateDraft(draft));
                }

                let send = egui::Button::new(RichText::new("➤").color(palette.secondary))
                    .fill(palette.primary)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(36.0, 28.0));
                let clicked = ui.add_enabled(input.send_enabled, send).clicked();
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                // Blank sends are filtered by the session engine
                if clicked || entered {
                    intents.push(Intent::Send);
                    response.request_focus();
                }
            });
        });
}
