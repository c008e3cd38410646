//! Main egui application — composes the panels and owns the mounted widget.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use widget_core::event_bus::EventBus;
use widget_core::persist;
use widget_core::ports::{ReplyPort, StoragePort, TimerPort};
use widget_core::reply::{run_reply_job, SimulatedReplier};
use widget_core::session::ReplyJob;
use widget_core::{ChatWidget, Intent};
use widget_platform::storage::auto_detect_storage;
use widget_platform::GlooTimer;
use widget_types::config::WidgetConfig;
use widget_ui::panels::customizer::{self, CustomizerAction};
use widget_ui::panels::{embed, widget};
use widget_ui::state::{SaveFeedback, UiState, View};
use widget_ui::theme;

/// The main application state
pub struct WidgetApp {
    ui_state: UiState,
    /// Working copy edited by the customizer
    draft: WidgetConfig,
    /// Last configuration persisted (or restored) from storage
    saved: WidgetConfig,
    event_bus: EventBus,
    widget: Rc<RefCell<ChatWidget>>,
    replier: Rc<dyn ReplyPort>,
    timer: Rc<dyn TimerPort>,
    storage: Rc<dyn StoragePort>,
    restored: Rc<RefCell<Option<WidgetConfig>>>,
    save_result: Rc<RefCell<Option<SaveFeedback>>>,
    first_frame: bool,
}

impl WidgetApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = WidgetConfig::default();
        let timer: Rc<dyn TimerPort> = Rc::new(GlooTimer::new());
        let storage = auto_detect_storage();
        let event_bus = EventBus::new();
        let widget = Rc::new(RefCell::new(ChatWidget::new(config.clone(), event_bus.clone())));

        let app = Self {
            ui_state: UiState::new(),
            draft: config.clone(),
            saved: config.clone(),
            event_bus,
            replier: Self::build_replier(timer.clone(), &config),
            widget,
            timer,
            storage,
            restored: Rc::new(RefCell::new(None)),
            save_result: Rc::new(RefCell::new(None)),
            first_frame: true,
        };

        Self::restore_config(app.storage.clone(), app.restored.clone());
        app.schedule_auto_open();
        app
    }

    fn build_replier(timer: Rc<dyn TimerPort>, config: &WidgetConfig) -> Rc<dyn ReplyPort> {
        Rc::new(SimulatedReplier::new(timer, u64::from(config.behavior.reply_delay_ms)))
    }

    /// Restore config from storage (async)
    fn restore_config(storage: Rc<dyn StoragePort>, slot: Rc<RefCell<Option<WidgetConfig>>>) {
        wasm_bindgen_futures::spawn_local(async move {
            match persist::load_config(storage.as_ref()).await {
                Ok(Some(config)) => *slot.borrow_mut() = Some(config),
                Ok(None) => log::debug!("No saved config, using defaults"),
                Err(e) => log::warn!("Could not restore config: {}", e),
            }
        });
    }

    /// Save config to storage (async); the outcome lands in `save_result`
    fn save_config(&self, config: WidgetConfig) {
        let storage = self.storage.clone();
        let slot = self.save_result.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let feedback = match persist::save_config(storage.as_ref(), &config).await {
                Ok(()) => SaveFeedback {
                    message: "Settings saved".to_string(),
                    success: true,
                },
                Err(e) => {
                    log::error!("Config save failed: {}", e);
                    SaveFeedback {
                        message: format!("Save failed: {}", e),
                        success: false,
                    }
                }
            };
            *slot.borrow_mut() = Some(feedback);
        });
    }

    /// Replace the widget with a fresh one for `config`. In-flight replies
    /// and the pending auto-open keep the old widget and land there.
    fn remount(&mut self, config: WidgetConfig) {
        self.event_bus = EventBus::new();
        self.widget = Rc::new(RefCell::new(ChatWidget::new(config, self.event_bus.clone())));
        self.replier = Self::build_replier(self.timer.clone(), self.widget.borrow().config());
        self.ui_state.busy = false;
        self.ui_state.status_text = "Ready".to_string();
        self.ui_state.reset_scroll();
        self.schedule_auto_open();
    }

    fn schedule_auto_open(&self) {
        let Some(delay_ms) = self.widget.borrow().auto_open_delay_ms() else {
            return;
        };
        let widget = self.widget.clone();
        let timer = self.timer.clone();
        wasm_bindgen_futures::spawn_local(async move {
            timer.sleep(delay_ms).await;
            widget.borrow_mut().apply(Intent::AutoOpen);
        });
    }

    fn dispatch(&self, intents: Vec<Intent>, ctx: &egui::Context) {
        for intent in intents {
            let job = self.widget.borrow_mut().apply(intent);
            if let Some(job) = job {
                self.spawn_reply(job, ctx);
            }
        }
    }

    /// Drive a reply job (async); the widget is borrowed only when it lands
    fn spawn_reply(&self, job: ReplyJob, ctx: &egui::Context) {
        let widget = self.widget.clone();
        let replier = self.replier.clone();
        let timer = self.timer.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            run_reply_job(widget, job, replier, timer).await;
            ctx.request_repaint();
        });
    }

    fn take_async_results(&mut self, ctx: &egui::Context) {
        let restored = self.restored.borrow_mut().take();
        if let Some(config) = restored {
            self.saved = config.clone();
            self.draft = config.clone();
            self.remount(config);
            ctx.request_repaint();
        }
        let feedback = self.save_result.borrow_mut().take();
        if let Some(feedback) = feedback {
            self.ui_state.save_feedback = Some(feedback);
            ctx.request_repaint();
        }
    }

    fn handle_customizer(&mut self, action: CustomizerAction) {
        match action {
            CustomizerAction::None => {}
            CustomizerAction::Changed => self.ui_state.save_feedback = None,
            CustomizerAction::SaveClicked => {
                if let Err(e) = self.draft.validate() {
                    self.ui_state.save_feedback = Some(SaveFeedback {
                        message: e.to_string(),
                        success: false,
                    });
                    return;
                }
                self.saved = self.draft.clone();
                self.save_config(self.saved.clone());
            }
            CustomizerAction::ResetClicked => {
                self.draft = self.saved.clone();
                self.ui_state.save_feedback = None;
            }
        }
        // Edits stay in the draft; the preview session survives until Save or Reset
        if action.remounts() {
            self.remount(self.saved.clone());
        }
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        self.take_async_results(ctx);

        // Drain events from the widget core
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.busy {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Chat Widget")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                for view in View::all() {
                    ui.selectable_value(&mut self.ui_state.view, *view, view.label());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.ui_state.status_text)
                            .color(theme::TEXT_SECONDARY)
                            .small(),
                    );
                });
            });
        });

        // ── Customizer side panel ────────────────────────────
        if self.ui_state.view == View::Customize {
            let mut action = CustomizerAction::None;
            SidePanel::left("customizer_panel")
                .min_width(300.0)
                .max_width(380.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        action = customizer::customizer_panel(
                            ui,
                            &mut self.draft,
                            &mut self.ui_state.customizer_tab,
                            self.ui_state.save_feedback.as_ref(),
                        );
                    });
                });
            self.handle_customizer(action);
        }

        // ── Main content ─────────────────────────────────────
        let view = self.ui_state.view;
        CentralPanel::default().show(ctx, |ui| match view {
            View::Embed => embed::embed_panel(ui, &mut self.ui_state),
            View::Preview | View::Customize => {
                ui.label(
                    RichText::new("Widget preview")
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
            }
        });

        // ── Widget overlay ───────────────────────────────────
        let model = self.widget.borrow().render();
        let intents = widget::widget_panel(ctx, &model, &mut self.ui_state);
        if !intents.is_empty() {
            self.dispatch(intents, ctx);
            ctx.request_repaint();
        }
    }
}
