//! Presentation state machine: Closed → Open ⇄ OpenMinimized → Closed.
//!
//! Every transition is total. Intents that make no sense in the current
//! state are no-ops and report `false`.

use widget_types::event::Visibility;

#[derive(Debug, Clone, Default)]
pub struct VisibilityMachine {
    state: Visibility,
    /// Set once the user has opened or closed the widget themselves.
    /// A pending auto-open never overrides an explicit user choice.
    user_touched: bool,
}

impl VisibilityMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn open(&mut self) -> bool {
        self.user_touched = true;
        self.transition_open()
    }

    pub fn close(&mut self) -> bool {
        self.user_touched = true;
        self.set(Visibility::Closed)
    }

    pub fn toggle_minimize(&mut self) -> bool {
        match self.state {
            Visibility::Closed => {
                log::debug!("toggle_minimize ignored while closed");
                false
            }
            Visibility::Open => self.set(Visibility::OpenMinimized),
            Visibility::OpenMinimized => self.set(Visibility::Open),
        }
    }

    /// Timed open scheduled from the widget's behavior settings
    pub fn auto_open(&mut self) -> bool {
        if self.user_touched {
            log::debug!("auto-open skipped, user already chose visibility");
            return false;
        }
        self.transition_open()
    }

    fn transition_open(&mut self) -> bool {
        match self.state {
            Visibility::Closed => self.set(Visibility::Open),
            _ => false,
        }
    }

    fn set(&mut self, next: Visibility) -> bool {
        if self.state == next {
            return false;
        }
        self.state = next;
        true
    }
}
