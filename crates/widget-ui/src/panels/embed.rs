//! Embed panel — shows copy-ready snippets for putting the widget on a site.

use egui::{self, RichText, Vec2};
use widget_core::embed::EmbedKind;
use crate::state::UiState;
use crate::theme::*;

pub fn embed_panel(ui: &mut egui::Ui, state: &mut UiState) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Embed Code").color(TEXT_PRIMARY));
            ui.label(
                RichText::new("Add the chat widget to your website with one of these snippets")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.separator();

            ui.horizontal(|ui| {
                for kind in EmbedKind::all() {
                    if ui.selectable_label(state.embed_kind == *kind, kind.label()).clicked() {
                        state.select_embed(*kind);
                    }
                }
            });
            ui.add_space(6.0);

            let mut code = state.embed_code();
            egui::Frame::default()
                .fill(BG_PRIMARY)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    // Read-only: edits to the buffer are discarded every frame
                    ui.add(
                        egui::TextEdit::multiline(&mut code)
                            .code_editor()
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .interactive(false),
                    );
                });

            ui.add_space(6.0);
            let now = ui.input(|i| i.time);
            ui.horizontal(|ui| {
                let copy = ui.add(
                    egui::Button::new(RichText::new("Copy Code").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(100.0, 28.0)),
                );
                if copy.clicked() {
                    ui.ctx().copy_text(code.clone());
                    state.mark_copied(now);
                    log::info!("Copied {} embed code", state.embed_kind.label());
                }
                if state.is_copied(now) {
                    ui.label(RichText::new("Copied!").color(SUCCESS).small());
                    ui.ctx().request_repaint_after(std::time::Duration::from_millis(250));
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Widget ID: {}  ·  Domain: {}",
                    state.embed.widget_id, state.embed.domain
                ))
                .color(TEXT_SECONDARY)
                .small(),
            );
        });
}
