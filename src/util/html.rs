//! HTML escaping and comment markup.
//!
//! Comment author and content are untrusted user input that end up in
//! `innerHTML`; everything interpolated into markup goes through
//! [`escape_html`] first.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

use crate::net::types::Comment;

/// Escape text for safe interpolation into element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inner markup of a freshly posted `.comment` node.
pub fn comment_markup(comment: &Comment) -> String {
    format!(
        "<div class=\"comment-author\">{}</div>\
         <div class=\"comment-time\">{}</div>\
         <div class=\"comment-content\">{}</div>",
        escape_html(&comment.author_name),
        escape_html(&comment.created_at),
        escape_html(&comment.content),
    )
}
