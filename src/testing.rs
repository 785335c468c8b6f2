//! In-memory doubles for element handles, transport, timers and toasts.
//!
//! Handles are cheap `Rc` clones: a controller owns one copy and the test
//! keeps another to observe what the controller did to the "page".

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use serde_json::Value;

use crate::net::api::{ApiRequest, HttpClient, NetworkError};
use crate::notify::{Notify, Severity, ToastHost, ToastSpec};
use crate::page::{CommentForm, CommentList, Control, LikeButton, Navigator, SearchInput, SuggestionsPanel};
use crate::timer::Scheduler;

// =============================================================
// Virtual-time scheduler
// =============================================================

struct ManualTimer {
    seq: u64,
    due: Duration,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualState {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    timers: RefCell<Vec<ManualTimer>>,
}

/// Scheduler whose clock only moves when [`ManualScheduler::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<ManualState>,
}

/// Cancels its timer on drop.
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn now(&self) -> Duration {
        self.state.now.get()
    }

    /// Timers that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.state.timers.borrow().iter().filter(|t| !t.cancelled.get()).count()
    }

    /// Move the clock forward, firing due timers in (due time, schedule order).
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let timers = self.state.timers.borrow();
                timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i)
            };
            let Some(index) = next else { break };
            let timer = self.state.timers.borrow_mut().remove(index);
            self.state.now.set(timer.due);
            if !timer.cancelled.get() {
                (timer.task)();
            }
        }
        self.state.now.set(target);
    }

    fn push(&self, delay: Duration, cancelled: Rc<Cell<bool>>, task: Box<dyn FnOnce()>) {
        let seq = self.state.next_seq.get();
        self.state.next_seq.set(seq + 1);
        self.state.timers.borrow_mut().push(ManualTimer { seq, due: self.now() + delay, cancelled, task });
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let cancelled = Rc::new(Cell::new(false));
        self.push(delay, Rc::clone(&cancelled), task);
        ManualHandle { cancelled }
    }

    fn schedule_detached(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.push(delay, Rc::new(Cell::new(false)), task);
    }
}

// =============================================================
// Transport
// =============================================================

/// Scripted [`HttpClient`]: replays queued responses in order.
#[derive(Default)]
pub struct FakeClient {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<Value, NetworkError>>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    probe: RefCell<Option<Box<dyn Fn()>>>,
}

impl FakeClient {
    pub fn responding(body: Value) -> Self {
        let client = Self::default();
        client.push_response(Ok(body));
        client
    }

    pub fn failing(error: NetworkError) -> Self {
        let client = Self::default();
        client.push_response(Err(error));
        client
    }

    pub fn push_response(&self, response: Result<Value, NetworkError>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Hold the next request open until the returned sender fires.
    pub fn gate_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    /// Run `probe` at the moment each request goes out.
    pub fn on_send(&self, probe: impl Fn() + 'static) {
        *self.probe.borrow_mut() = Some(Box::new(probe));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl HttpClient for FakeClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, NetworkError> {
        self.requests.borrow_mut().push(request);
        if let Some(probe) = self.probe.borrow().as_ref() {
            probe();
        }
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            if gate.await.is_err() {
                return Err(NetworkError::Transport("gate dropped".to_owned()));
            }
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(NetworkError::Transport("no response scripted".to_owned())))
    }
}

// =============================================================
// Notifications
// =============================================================

/// [`Notify`] that only records what was shown.
#[derive(Default)]
pub struct RecordingNotify {
    shown: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotify {
    pub fn shown(&self) -> Vec<(String, Severity)> {
        self.shown.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.shown.borrow().last().cloned()
    }
}

impl Notify for RecordingNotify {
    fn show(&self, text: &str, severity: Severity) {
        self.shown.borrow_mut().push((text.to_owned(), severity));
    }
}

#[derive(Clone, Debug)]
pub struct FakeToast {
    pub id: u64,
    pub spec: ToastSpec,
    pub attached: bool,
    pub animation: Option<String>,
}

/// Toast host that keeps every toast it ever mounted.
#[derive(Clone, Default)]
pub struct FakeToastHost {
    toasts: Rc<RefCell<Vec<FakeToast>>>,
    unavailable: Rc<Cell<bool>>,
}

impl FakeToastHost {
    /// A host with no body to mount on.
    pub fn unavailable() -> Self {
        let host = Self::default();
        host.unavailable.set(true);
        host
    }

    pub fn all(&self) -> Vec<FakeToast> {
        self.toasts.borrow().clone()
    }

    pub fn visible(&self) -> Vec<FakeToast> {
        self.toasts.borrow().iter().filter(|t| t.attached).cloned().collect()
    }

    fn with_toast(&self, id: u64, f: impl FnOnce(&mut FakeToast)) {
        if let Some(toast) = self.toasts.borrow_mut().iter_mut().find(|t| t.id == id) {
            f(toast);
        }
    }
}

impl ToastHost for FakeToastHost {
    type Toast = u64;

    fn mount(&self, spec: &ToastSpec) -> Option<u64> {
        if self.unavailable.get() {
            return None;
        }
        let mut toasts = self.toasts.borrow_mut();
        let id = toasts.len() as u64 + 1;
        toasts.push(FakeToast { id, spec: spec.clone(), attached: true, animation: None });
        Some(id)
    }

    fn start_exit(&self, toast: &u64, animation: &str) {
        self.with_toast(*toast, |t| t.animation = Some(animation.to_owned()));
    }

    fn is_attached(&self, toast: &u64) -> bool {
        self.toasts.borrow().iter().any(|t| t.id == *toast && t.attached)
    }

    fn remove(&self, toast: &u64) {
        self.with_toast(*toast, |t| t.attached = false);
    }
}

// =============================================================
// Page elements
// =============================================================

#[derive(Default)]
struct LikeButtonState {
    disabled: Cell<bool>,
    data: RefCell<HashMap<String, String>>,
    count: RefCell<String>,
    liked: Cell<bool>,
    disabled_history: RefCell<Vec<bool>>,
}

#[derive(Clone, Default)]
pub struct FakeLikeButton {
    state: Rc<LikeButtonState>,
}

impl FakeLikeButton {
    pub fn new(target_type: Option<&str>, target_id: Option<&str>, count: &str, liked: bool) -> Self {
        let button = Self::default();
        {
            let mut data = button.state.data.borrow_mut();
            if let Some(target_type) = target_type {
                data.insert("type".to_owned(), target_type.to_owned());
            }
            if let Some(target_id) = target_id {
                data.insert("id".to_owned(), target_id.to_owned());
            }
        }
        *button.state.count.borrow_mut() = count.to_owned();
        button.state.liked.set(liked);
        button
    }

    pub fn count(&self) -> String {
        self.state.count.borrow().clone()
    }

    pub fn liked(&self) -> bool {
        self.state.liked.get()
    }

    /// Every value passed to `set_disabled`, in order.
    pub fn disabled_history(&self) -> Vec<bool> {
        self.state.disabled_history.borrow().clone()
    }

    pub fn force_disabled(&self, disabled: bool) {
        self.state.disabled.set(disabled);
    }
}

impl Control for FakeLikeButton {
    fn is_disabled(&self) -> bool {
        self.state.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.disabled.set(disabled);
        self.state.disabled_history.borrow_mut().push(disabled);
    }
}

impl LikeButton for FakeLikeButton {
    fn data(&self, name: &str) -> Option<String> {
        self.state.data.borrow().get(name).cloned()
    }

    fn set_count(&self, count: i64) {
        *self.state.count.borrow_mut() = count.to_string();
    }

    fn set_liked(&self, liked: bool) {
        self.state.liked.set(liked);
    }
}

#[derive(Default)]
struct CommentFormState {
    disabled: Cell<bool>,
    label: RefCell<String>,
    fields: RefCell<Vec<(String, String)>>,
    resets: Cell<usize>,
    label_history: RefCell<Vec<String>>,
}

#[derive(Clone, Default)]
pub struct FakeCommentForm {
    state: Rc<CommentFormState>,
}

impl FakeCommentForm {
    pub fn new(label: &str, fields: &[(&str, &str)]) -> Self {
        let form = Self::default();
        *form.state.label.borrow_mut() = label.to_owned();
        *form.state.fields.borrow_mut() =
            fields.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        form
    }

    pub fn label(&self) -> String {
        self.state.label.borrow().clone()
    }

    pub fn label_history(&self) -> Vec<String> {
        self.state.label_history.borrow().clone()
    }

    pub fn resets(&self) -> usize {
        self.state.resets.get()
    }

    pub fn force_disabled(&self, disabled: bool) {
        self.state.disabled.set(disabled);
    }
}

impl Control for FakeCommentForm {
    fn is_disabled(&self) -> bool {
        self.state.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.disabled.set(disabled);
    }
}

impl CommentForm for FakeCommentForm {
    fn submit_label(&self) -> String {
        self.label()
    }

    fn set_submit_label(&self, label: &str) {
        *self.state.label.borrow_mut() = label.to_owned();
        self.state.label_history.borrow_mut().push(label.to_owned());
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.state.fields.borrow().clone()
    }

    fn reset(&self) {
        for (_, value) in self.state.fields.borrow_mut().iter_mut() {
            value.clear();
        }
        self.state.resets.set(self.state.resets.get() + 1);
    }
}

/// Comment container holding the inner markup of each node, first to last.
#[derive(Clone, Default)]
pub struct FakeCommentList {
    nodes: Rc<RefCell<Vec<String>>>,
    appends: Rc<Cell<usize>>,
}

impl FakeCommentList {
    pub fn with_comments(existing: &[&str]) -> Self {
        let list = Self::default();
        *list.nodes.borrow_mut() = existing.iter().map(|s| (*s).to_owned()).collect();
        list
    }

    pub fn nodes(&self) -> Vec<String> {
        self.nodes.borrow().clone()
    }

    pub fn appends(&self) -> usize {
        self.appends.get()
    }
}

impl CommentList for FakeCommentList {
    fn has_comment(&self) -> bool {
        !self.nodes.borrow().is_empty()
    }

    fn insert_before_first(&self, inner_html: &str) {
        self.nodes.borrow_mut().insert(0, inner_html.to_owned());
    }

    fn append(&self, inner_html: &str) {
        self.nodes.borrow_mut().push(inner_html.to_owned());
        self.appends.set(self.appends.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct FakeSearchInput {
    value: Rc<RefCell<String>>,
}

impl FakeSearchInput {
    pub fn set(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
    }
}

impl SearchInput for FakeSearchInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

#[derive(Clone, Default)]
pub struct FakePanel {
    hides: Rc<Cell<usize>>,
}

impl FakePanel {
    pub fn hides(&self) -> usize {
        self.hides.get()
    }
}

impl SuggestionsPanel for FakePanel {
    fn hide(&self) {
        self.hides.set(self.hides.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct FakeNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl FakeNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn navigate(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_owned());
    }
}
