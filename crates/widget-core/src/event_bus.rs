//! Event bus between the widget core and the view layer.
//!
//! Single-threaded (WASM main thread), shared via Rc<RefCell<..>>.
//! The core emits; the UI drains once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use widget_types::event::WidgetEvent;

/// Oldest events are dropped once the queue holds this many.
pub const DEFAULT_CAPACITY: usize = 256;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<WidgetEvent>>>,
    capacity: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    pub fn emit(&self, event: WidgetEvent) {
        let mut queue = self.inner.borrow_mut();
        if queue.len() == self.capacity {
            if let Some(dropped) = queue.pop_front() {
                log::debug!("Event bus full, dropping {:?}", dropped);
            }
        }
        queue.push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_pending()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
