//! Search controller: submit navigates, typing is debounced into a hook.
//!
//! Suggestions have no server contract yet. [`SuggestionsHook`] is the
//! extension point; the default [`InertSuggestions`] only hides the panel
//! when the box is cleared.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::rc::Rc;
use std::time::Duration;

use crate::notify::{Notify, Severity};
use crate::page::{Navigator, SearchInput, SuggestionsPanel};
use crate::timer::{Debouncer, Scheduler};

/// Which path a submit took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query; a warning was shown and nothing else happened.
    Empty,
    /// The browser was sent to this URL.
    Navigated(String),
}

/// Receives the input's value once typing has paused.
pub trait SuggestionsHook {
    fn suggest(&self, keyword: &str);
}

/// Placeholder hook: hides the panel for a blank keyword, otherwise does nothing.
pub struct InertSuggestions<P> {
    panel: Option<P>,
}

impl<P: SuggestionsPanel> InertSuggestions<P> {
    pub fn new(panel: Option<P>) -> Self {
        Self { panel }
    }

    /// Hide the suggestions panel if the page has one.
    pub fn hide_suggestions(&self) {
        if let Some(panel) = &self.panel {
            panel.hide();
        }
    }
}

impl<P: SuggestionsPanel> SuggestionsHook for InertSuggestions<P> {
    fn suggest(&self, keyword: &str) {
        if keyword.trim().is_empty() {
            self.hide_suggestions();
            return;
        }
        log::debug!("suggestions requested for {keyword:?}; no source configured");
    }
}

/// Results page URL for `keyword`, percent-encoded like `encodeURIComponent`.
///
/// `byte_serialize` turns a literal `+` into `%2B`, so every `+` it emits is a
/// space.
pub fn search_url(search_path: &str, keyword: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
    format!("{search_path}?q={}", encoded.replace('+', "%20"))
}

/// Timing, target and copy for a [`SearchController`].
#[derive(Clone, Debug)]
pub struct SearchSettings {
    pub debounce: Duration,
    pub search_path: String,
    pub empty_message: String,
}

/// Drives the search form and its input.
pub struct SearchController<S: Scheduler, I, N> {
    input: Rc<I>,
    navigator: N,
    notifier: Rc<dyn Notify>,
    hook: Rc<dyn SuggestionsHook>,
    debouncer: Debouncer<S>,
    search_path: String,
    empty_message: String,
}

impl<S, I, N> SearchController<S, I, N>
where
    S: Scheduler,
    I: SearchInput + 'static,
    N: Navigator,
{
    pub fn new(
        input: I,
        navigator: N,
        notifier: Rc<dyn Notify>,
        hook: Rc<dyn SuggestionsHook>,
        scheduler: S,
        settings: SearchSettings,
    ) -> Self {
        let SearchSettings { debounce, search_path, empty_message } = settings;
        Self {
            input: Rc::new(input),
            navigator,
            notifier,
            hook,
            debouncer: Debouncer::new(scheduler, debounce),
            search_path,
            empty_message,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Handle a submit of the search form. Default navigation is the caller's job.
    pub fn submit(&self) -> SearchOutcome {
        let value = self.input.value();
        let keyword = value.trim();
        if keyword.is_empty() {
            self.notifier.show(&self.empty_message, Severity::Warning);
            return SearchOutcome::Empty;
        }
        let url = search_url(&self.search_path, keyword);
        self.debouncer.cancel();
        self.navigator.navigate(&url);
        SearchOutcome::Navigated(url)
    }

    /// Handle an input event: (re)start the quiet-period timer.
    ///
    /// The value is read when the timer fires, not when the key is pressed.
    pub fn input_changed(&self) {
        let input = Rc::clone(&self.input);
        let hook = Rc::clone(&self.hook);
        self.debouncer.trigger(Box::new(move || hook.suggest(&input.value())));
    }
}
