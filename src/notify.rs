//! Toast notifications.
//!
//! DESIGN
//! ======
//! One toast is visible at a time per [`Notifier`]: showing a new one removes
//! the current one first (supersede-on-new). Each toast owns a detached
//! two-step timer (display, then exit animation, then removal), and removal is
//! skipped when the node is no longer attached, so a superseded toast's timer
//! can never remove its successor.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Timings;
use crate::consts::TOAST_CLASS;
use crate::timer::Scheduler;

/// Visual severity of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Info => "#007bff",
            Self::Success => "#28a745",
            Self::Error => "#dc3545",
            Self::Warning => "#ffc107",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            Self::Warning => "#212529",
            _ => "white",
        }
    }
}

/// Anything that can put a message in front of the user.
pub trait Notify {
    fn show(&self, text: &str, severity: Severity);
}

/// Everything a host needs to build a toast node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastSpec {
    pub text: String,
    pub class_name: String,
    pub style: String,
}

impl ToastSpec {
    pub fn new(text: &str, severity: Severity) -> Self {
        Self {
            text: text.to_owned(),
            class_name: format!("{TOAST_CLASS} message-{}", severity.as_str()),
            style: format!(
                "position: fixed; top: 20px; right: 20px; padding: 12px 20px; \
                 border-radius: 4px; color: {}; font-weight: 500; z-index: 1000; \
                 animation: slideIn 0.3s ease; background-color: {};",
                severity.foreground(),
                severity.background(),
            ),
        }
    }
}

/// CSS `animation` value applied when a toast starts leaving.
pub fn exit_animation(exit: Duration) -> String {
    format!("slideOut {}ms ease", exit.as_millis())
}

/// Page surface toasts are mounted on.
pub trait ToastHost {
    type Toast: Clone + PartialEq + 'static;

    /// Create and attach a toast node; `None` if the page has nowhere to put it.
    fn mount(&self, spec: &ToastSpec) -> Option<Self::Toast>;
    fn start_exit(&self, toast: &Self::Toast, animation: &str);
    fn is_attached(&self, toast: &Self::Toast) -> bool;
    fn remove(&self, toast: &Self::Toast);
}

/// Supersede-on-new toast presenter.
pub struct Notifier<H: ToastHost, S: Scheduler> {
    inner: Rc<NotifierInner<H, S>>,
}

struct NotifierInner<H: ToastHost, S: Scheduler> {
    host: H,
    scheduler: S,
    display: Duration,
    exit: Duration,
    current: RefCell<Option<H::Toast>>,
}

impl<H: ToastHost, S: Scheduler> Clone for Notifier<H, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<H, S> Notifier<H, S>
where
    H: ToastHost + 'static,
    S: Scheduler + 'static,
{
    pub fn new(host: H, scheduler: S, timings: &Timings) -> Self {
        Self {
            inner: Rc::new(NotifierInner {
                host,
                scheduler,
                display: timings.toast_display(),
                exit: timings.toast_exit(),
                current: RefCell::new(None),
            }),
        }
    }

    /// The toast currently owned by this notifier, if any.
    #[cfg(test)]
    pub(crate) fn current(&self) -> Option<H::Toast> {
        self.inner.current.borrow().clone()
    }
}

impl<H, S> NotifierInner<H, S>
where
    H: ToastHost + 'static,
    S: Scheduler + 'static,
{
    fn begin_exit(self: Rc<Self>, toast: H::Toast) {
        if !self.host.is_attached(&toast) {
            return;
        }
        self.host.start_exit(&toast, &exit_animation(self.exit));
        let owner = Rc::clone(&self);
        self.scheduler
            .schedule_detached(self.exit, Box::new(move || owner.finish(&toast)));
    }

    fn finish(&self, toast: &H::Toast) {
        if self.host.is_attached(toast) {
            self.host.remove(toast);
        }
        let mut current = self.current.borrow_mut();
        if current.as_ref() == Some(toast) {
            *current = None;
        }
    }
}

impl<H, S> Notify for Notifier<H, S>
where
    H: ToastHost + 'static,
    S: Scheduler + 'static,
{
    fn show(&self, text: &str, severity: Severity) {
        let inner = &self.inner;
        let previous = inner.current.take();
        if let Some(previous) = previous {
            if inner.host.is_attached(&previous) {
                inner.host.remove(&previous);
            }
        }

        let Some(toast) = inner.host.mount(&ToastSpec::new(text, severity)) else {
            log::warn!("no toast host available, dropped {} notice: {text}", severity.as_str());
            return;
        };
        *inner.current.borrow_mut() = Some(toast.clone());

        let owner = Rc::clone(inner);
        inner
            .scheduler
            .schedule_detached(inner.display, Box::new(move || owner.begin_exit(toast)));
    }
}
