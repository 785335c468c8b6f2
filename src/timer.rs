//! Timer seam and debouncing.
//!
//! DESIGN
//! ======
//! [`Scheduler::schedule`] returns a handle whose drop cancels the timer, the
//! same contract as `gloo_timers::callback::Timeout`. Replacing a stored
//! handle is therefore a cancel-and-reschedule, which is all a debouncer is.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::time::Duration;

/// Deferred single-shot task execution on the UI thread.
pub trait Scheduler {
    /// Cancels the timer when dropped.
    type Handle;

    /// Run `task` once after `delay` unless the returned handle is dropped first.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `task` once after `delay`; cannot be cancelled.
    fn schedule_detached(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Last-write-wins delayed trigger.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self { scheduler, delay, pending: RefCell::new(None) }
    }

    /// Cancel any pending task and schedule `task` one full delay from now.
    pub fn trigger(&self, task: Box<dyn FnOnce()>) {
        let handle = self.scheduler.schedule(self.delay, task);
        let previous = self.pending.replace(Some(handle));
        drop(previous);
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&self) {
        let previous = self.pending.take();
        drop(previous);
    }

    #[cfg(test)]
    pub(crate) fn delay(&self) -> Duration {
        self.delay
    }
}

/// `setTimeout`-backed scheduler for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_millis(delay), task)
    }

    fn schedule_detached(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_millis(delay), task).forget();
    }
}

#[cfg(feature = "hydrate")]
fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
