//! Runtime configuration for the interaction layer.
//!
//! DESIGN
//! ======
//! Every element selector, endpoint, timing and user-facing string the
//! controllers use lives here instead of being looked up ad hoc, so a page can
//! override any of them through an embedded JSON block and tests can build
//! controllers against fixed values. Missing keys fall back to `consts`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// How comment form fields are encoded on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentEncoding {
    #[default]
    Multipart,
    UrlEncoded,
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub comment_endpoint: String,
    pub like_endpoint: String,
    pub search_path: String,
    pub comment_encoding: CommentEncoding,
    pub selectors: Selectors,
    pub messages: Messages,
    pub timings: Timings,
    /// `log` level name used when the console logger is installed.
    pub log_level: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            comment_endpoint: consts::COMMENT_ENDPOINT.to_owned(),
            like_endpoint: consts::LIKE_ENDPOINT.to_owned(),
            search_path: consts::SEARCH_PATH.to_owned(),
            comment_encoding: CommentEncoding::default(),
            selectors: Selectors::default(),
            messages: Messages::default(),
            timings: Timings::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl InteractionConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidJson`] when `raw` is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured log level, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Info)
    }
}

/// CSS selectors for the page anchors each controller needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub comment_form: String,
    pub submit_button: String,
    pub comment_list: String,
    pub comment_item: String,
    pub like_button: String,
    pub like_count: String,
    pub search_form: String,
    pub search_input: String,
    pub suggestions: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            comment_form: consts::COMMENT_FORM_SELECTOR.to_owned(),
            submit_button: consts::SUBMIT_BUTTON_SELECTOR.to_owned(),
            comment_list: consts::COMMENT_LIST_SELECTOR.to_owned(),
            comment_item: consts::COMMENT_ITEM_SELECTOR.to_owned(),
            like_button: consts::LIKE_BUTTON_SELECTOR.to_owned(),
            like_count: consts::LIKE_COUNT_SELECTOR.to_owned(),
            search_form: consts::SEARCH_FORM_SELECTOR.to_owned(),
            search_input: consts::SEARCH_INPUT_SELECTOR.to_owned(),
            suggestions: consts::SUGGESTIONS_SELECTOR.to_owned(),
        }
    }
}

/// User-facing strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub busy_label: String,
    pub network_error: String,
    pub comment_posted: String,
    pub comment_failed: String,
    pub like_failed: String,
    pub empty_search: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            busy_label: consts::BUSY_LABEL.to_owned(),
            network_error: consts::NETWORK_ERROR_TEXT.to_owned(),
            comment_posted: consts::COMMENT_POSTED_TEXT.to_owned(),
            comment_failed: consts::COMMENT_FAILED_TEXT.to_owned(),
            like_failed: consts::LIKE_FAILED_TEXT.to_owned(),
            empty_search: consts::EMPTY_SEARCH_TEXT.to_owned(),
        }
    }
}

/// Timer lengths in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub toast_display_ms: u64,
    pub toast_exit_ms: u64,
    pub search_debounce_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast_display_ms: consts::TOAST_DISPLAY_MS,
            toast_exit_ms: consts::TOAST_EXIT_MS,
            search_debounce_ms: consts::SEARCH_DEBOUNCE_MS,
        }
    }
}

impl Timings {
    pub fn toast_display(&self) -> Duration {
        Duration::from_millis(self.toast_display_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
