//! Stylesheet injected once at start-up.
//!
//! Supplies the toast enter/exit keyframes referenced by the notifier's inline
//! `animation` and the visual states of like buttons.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// `id` of the injected `<style>` element, used to avoid injecting twice.
pub const STYLE_ELEMENT_ID: &str = "blog-interact-style";

pub const INTERACTION_CSS: &str = r"
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}

.like-btn {
    background: none;
    border: 1px solid #ddd;
    padding: 0.5rem 1rem;
    border-radius: 4px;
    cursor: pointer;
    transition: all 0.2s ease;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
}

.like-btn:hover {
    border-color: #007bff;
    color: #007bff;
}

.like-btn.liked {
    background: #007bff;
    color: white;
    border-color: #007bff;
}

.like-btn:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}
";
