//! Reply pipeline: the simulated replier and the job driver.

use std::cell::RefCell;
use std::rc::Rc;
use async_trait::async_trait;
use futures::future::{self, Either};
use widget_types::{Result, WidgetError};
use crate::ports::{ReplyPort, ReplyRequest, ReplyResponse, TimerPort};
use crate::session::ReplyJob;
use crate::widget::ChatWidget;

pub const SIMULATED_REPLY: &str = "This is a simulated response from the AI assistant. \
In a real implementation, this would be replaced with an actual response from the AI model.";

/// Answers every prompt with a fixed payload after a configurable delay.
pub struct SimulatedReplier {
    timer: Rc<dyn TimerPort>,
    delay_ms: u64,
}

impl SimulatedReplier {
    pub fn new(timer: Rc<dyn TimerPort>, delay_ms: u64) -> Self {
        Self { timer, delay_ms }
    }
}

#[async_trait(?Send)]
impl ReplyPort for SimulatedReplier {
    async fn reply(&self, req: ReplyRequest) -> Result<ReplyResponse> {
        log::debug!("Simulating reply {:?} in {}ms", req.ticket, self.delay_ms);
        self.timer.sleep(self.delay_ms).await;
        Ok(ReplyResponse {
            content: SIMULATED_REPLY.to_string(),
        })
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

/// Race the reply against a deadline.
pub async fn reply_with_timeout(
    replier: &dyn ReplyPort,
    timer: &dyn TimerPort,
    req: ReplyRequest,
    timeout_ms: u64,
) -> Result<ReplyResponse> {
    match future::select(replier.reply(req), timer.sleep(timeout_ms)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(WidgetError::ReplyTimeout(timeout_ms)),
    }
}

/// Drive one reply job to completion and land the result.
///
/// The widget is never borrowed across the await. The result lands
/// regardless of the widget's visibility at that point.
pub async fn run_reply_job(
    widget: Rc<RefCell<ChatWidget>>,
    job: ReplyJob,
    replier: Rc<dyn ReplyPort>,
    timer: Rc<dyn TimerPort>,
) {
    let timeout_ms = u64::from(widget.borrow().config().behavior.reply_timeout_ms);
    log::debug!("Running reply {:?} via {}", job.ticket, replier.name());

    let result = reply_with_timeout(replier.as_ref(), timer.as_ref(), job.request.clone(), timeout_ms)
        .await
        .map(|r| r.content);

    widget.borrow_mut().complete(&job, result);
}
