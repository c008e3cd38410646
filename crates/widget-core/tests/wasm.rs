//! WASM-target tests for widget-core.
//!
//! Runs the session engine, visibility machine, render model and reply
//! pipeline under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use widget_core::embed::EmbedCode;
use widget_core::event_bus::EventBus;
use widget_core::ports::*;
use widget_core::reply::{run_reply_job, SimulatedReplier, SIMULATED_REPLY};
use widget_core::{ChatWidget, Intent};
use widget_types::config::WidgetConfig;
use widget_types::event::Visibility;
use widget_types::message::Sender;

use std::cell::RefCell;
use std::rc::Rc;
use async_trait::async_trait;

struct ImmediateTimer;

#[async_trait(?Send)]
impl TimerPort for ImmediateTimer {
    async fn sleep(&self, _ms: u64) {}
}

fn widget() -> Rc<RefCell<ChatWidget>> {
    Rc::new(RefCell::new(ChatWidget::new(WidgetConfig::default(), EventBus::new())))
}

#[wasm_bindgen_test]
fn fresh_widget_is_closed_with_welcome() {
    let w = widget();
    let w = w.borrow();
    assert_eq!(w.visibility(), Visibility::Closed);
    assert_eq!(w.session().messages().len(), 1);
    assert_eq!(w.session().messages()[0].sender(), Sender::Bot);
}

#[wasm_bindgen_test]
fn toggle_minimize_while_closed_is_noop() {
    let w = widget();
    w.borrow_mut().apply(Intent::ToggleMinimize);
    assert_eq!(w.borrow().visibility(), Visibility::Closed);
}

#[wasm_bindgen_test]
fn blank_send_changes_nothing() {
    let w = widget();
    w.borrow_mut().apply(Intent::UpdateDraft("   ".to_string()));
    assert!(w.borrow_mut().apply(Intent::Send).is_none());
    assert_eq!(w.borrow().session().messages().len(), 1);
    assert!(w.borrow().session().pending_reply().is_none());
}

#[wasm_bindgen_test]
async fn send_and_reply_scenario() {
    let w = widget();
    w.borrow_mut().apply(Intent::UpdateDraft("Hi".to_string()));
    let job = w.borrow_mut().apply(Intent::Send).unwrap();
    assert_eq!(w.borrow().session().messages().len(), 2);
    assert!(w.borrow().session().pending_reply().is_some());

    let timer: Rc<dyn TimerPort> = Rc::new(ImmediateTimer);
    let replier: Rc<dyn ReplyPort> = Rc::new(SimulatedReplier::new(timer.clone(), 1500));
    run_reply_job(w.clone(), job, replier, timer).await;

    let w = w.borrow();
    assert_eq!(w.session().messages().len(), 3);
    assert_eq!(w.session().messages()[2].content(), SIMULATED_REPLY);
    assert!(w.session().pending_reply().is_none());
}

#[wasm_bindgen_test]
fn embed_script_tag() {
    assert_eq!(
        EmbedCode::default().script_tag(),
        r#"<script src="https://example.com/widget/chat-widget-123.js" async></script>"#
    );
}
