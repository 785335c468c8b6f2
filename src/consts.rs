//! Shared constants: endpoints, selectors, timings and default copy.

// ── Endpoints ───────────────────────────────────────────────────

/// Comment submission endpoint (form body).
pub const COMMENT_ENDPOINT: &str = "/blog/api/comments";

/// Like toggle endpoint (JSON body).
pub const LIKE_ENDPOINT: &str = "/blog/api/like";

/// Search results page; the keyword is appended as `?q=`.
pub const SEARCH_PATH: &str = "/blog/search";

// ── Timings (milliseconds) ──────────────────────────────────────

/// How long a toast stays fully visible before its exit animation starts.
pub const TOAST_DISPLAY_MS: u64 = 3000;

/// Length of the toast exit animation; the node is removed afterwards.
pub const TOAST_EXIT_MS: u64 = 300;

/// Quiet period after the last keystroke before suggestions are requested.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

// ── Selectors ───────────────────────────────────────────────────

pub const COMMENT_FORM_SELECTOR: &str = "#comment-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const COMMENT_LIST_SELECTOR: &str = ".comments";
pub const COMMENT_ITEM_SELECTOR: &str = ".comment";
pub const LIKE_BUTTON_SELECTOR: &str = ".like-btn";
pub const LIKE_COUNT_SELECTOR: &str = ".like-count";
pub const SEARCH_FORM_SELECTOR: &str = "#search-form";
pub const SEARCH_INPUT_SELECTOR: &str = "#search-input";
pub const SUGGESTIONS_SELECTOR: &str = "#search-suggestions";

/// Id of the optional embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "blog-interact-config";

// ── Classes ─────────────────────────────────────────────────────

/// Class toggled on a like button the current visitor has liked.
pub const LIKED_CLASS: &str = "liked";

/// Class of a rendered comment node.
pub const COMMENT_CLASS: &str = "comment";

/// Base class of every toast node.
pub const TOAST_CLASS: &str = "message-toast";

// ── Default copy ────────────────────────────────────────────────

pub const BUSY_LABEL: &str = "Submitting...";
pub const NETWORK_ERROR_TEXT: &str = "Network error, please try again later";
pub const COMMENT_POSTED_TEXT: &str = "Comment posted!";
pub const COMMENT_FAILED_TEXT: &str = "Failed to post comment";
pub const LIKE_FAILED_TEXT: &str = "Operation failed";
pub const EMPTY_SEARCH_TEXT: &str = "Please enter a search keyword";
