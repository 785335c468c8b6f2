//! Element handle traits the controllers are written against.
//!
//! ARCHITECTURE
//! ============
//! Controllers never touch `web-sys` directly. Each page anchor they need is
//! described here by the handful of operations they perform on it; the `dom`
//! module implements these for real elements and tests use in-memory fakes.

/// Anything with a disabled flag that doubles as its busy marker.
pub trait Control {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// A like button carrying `data-type` / `data-id` and an inner count element.
pub trait LikeButton: Control {
    /// Raw value of a `data-*` attribute (`name` without the prefix).
    fn data(&self, name: &str) -> Option<String>;
    /// Overwrite the rendered like count.
    fn set_count(&self, count: i64);
    /// Add or remove the "liked" visual state.
    fn set_liked(&self, liked: bool);
}

/// The comment form; its [`Control`] impl is the submit button.
pub trait CommentForm: Control {
    fn submit_label(&self) -> String;
    fn set_submit_label(&self, label: &str);
    /// Current field values as `(name, value)` pairs, in document order.
    fn fields(&self) -> Vec<(String, String)>;
    /// Clear all fields back to their initial values.
    fn reset(&self);
}

/// Container of rendered comments, newest first.
pub trait CommentList {
    /// Whether at least one comment node is present.
    fn has_comment(&self) -> bool;
    /// Insert a new comment node with markup `inner_html` before the first
    /// existing comment.
    fn insert_before_first(&self, inner_html: &str);
    /// Append a new comment node with markup `inner_html`.
    fn append(&self, inner_html: &str);
}

/// The free-text search input.
pub trait SearchInput {
    fn value(&self) -> String;
}

/// Optional dropdown for search suggestions.
pub trait SuggestionsPanel {
    fn hide(&self);
}

/// Full-page navigation.
pub trait Navigator {
    fn navigate(&self, url: &str);
}
