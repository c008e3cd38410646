//! Timer adapter backed by `setTimeout` through gloo-timers.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use widget_core::ports::TimerPort;

/// Longest delay `setTimeout` honours. gloo-timers passes the delay on as
/// an `i32`, so anything larger would wrap negative and fire at once.
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// Clamp a millisecond delay to what the browser timer accepts
pub fn clamp_delay(ms: u64) -> u32 {
    u32::try_from(ms).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl GlooTimer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl TimerPort for GlooTimer {
    async fn sleep(&self, ms: u64) {
        TimeoutFuture::new(clamp_delay(ms)).await;
    }
}
