//! `web-sys` implementations of the element handle traits.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::consts::{COMMENT_CLASS, LIKED_CLASS};
use crate::page::{CommentForm, CommentList, Control, LikeButton, Navigator, SearchInput, SuggestionsPanel};

fn is_disabled(element: &Element) -> bool {
    element.has_attribute("disabled")
}

fn set_disabled(element: &Element, disabled: bool) {
    let result = if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    };
    if let Err(err) = result {
        log::warn!("failed to toggle disabled: {err:?}");
    }
}

// =============================================================
// Like button
// =============================================================

pub struct DomLikeButton {
    element: HtmlElement,
    count_selector: String,
}

impl DomLikeButton {
    pub fn new(element: HtmlElement, count_selector: &str) -> Self {
        Self { element, count_selector: count_selector.to_owned() }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Control for DomLikeButton {
    fn is_disabled(&self) -> bool {
        is_disabled(&self.element)
    }

    fn set_disabled(&self, disabled: bool) {
        set_disabled(&self.element, disabled);
    }
}

impl LikeButton for DomLikeButton {
    fn data(&self, name: &str) -> Option<String> {
        self.element.get_attribute(&format!("data-{name}"))
    }

    fn set_count(&self, count: i64) {
        match self.element.query_selector(&self.count_selector) {
            Ok(Some(count_el)) => count_el.set_text_content(Some(&count.to_string())),
            Ok(None) => log::debug!("like button has no {} element", self.count_selector),
            Err(err) => log::warn!("invalid like count selector {}: {err:?}", self.count_selector),
        }
    }

    fn set_liked(&self, liked: bool) {
        if let Err(err) = self.element.class_list().toggle_with_force(LIKED_CLASS, liked) {
            log::warn!("failed to toggle {LIKED_CLASS} class: {err:?}");
        }
    }
}

// =============================================================
// Comment form + list
// =============================================================

pub struct DomCommentForm {
    form: HtmlFormElement,
    submit: Element,
}

impl DomCommentForm {
    pub fn new(form: HtmlFormElement, submit: Element) -> Self {
        Self { form, submit }
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl Control for DomCommentForm {
    fn is_disabled(&self) -> bool {
        is_disabled(&self.submit)
    }

    fn set_disabled(&self, disabled: bool) {
        set_disabled(&self.submit, disabled);
    }
}

impl CommentForm for DomCommentForm {
    fn submit_label(&self) -> String {
        self.submit.text_content().unwrap_or_default()
    }

    fn set_submit_label(&self, label: &str) {
        self.submit.set_text_content(Some(label));
    }

    fn fields(&self) -> Vec<(String, String)> {
        let data = match web_sys::FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(err) => {
                log::error!("failed to read comment form: {err:?}");
                return Vec::new();
            }
        };
        let entries = match js_sys::try_iter(&data) {
            Ok(Some(entries)) => entries,
            Ok(None) | Err(_) => return Vec::new(),
        };
        let mut fields = Vec::new();
        for entry in entries.flatten() {
            let pair: js_sys::Array = entry.unchecked_into();
            // File entries have no string value and are skipped.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push((name, value));
            }
        }
        fields
    }

    fn reset(&self) {
        self.form.reset();
    }
}

pub struct DomCommentList {
    container: Element,
    item_selector: String,
}

impl DomCommentList {
    pub fn new(container: Element, item_selector: &str) -> Self {
        Self { container, item_selector: item_selector.to_owned() }
    }

    fn first_comment(&self) -> Option<Element> {
        match self.container.query_selector(&self.item_selector) {
            Ok(first) => first,
            Err(err) => {
                log::warn!("invalid comment selector {}: {err:?}", self.item_selector);
                None
            }
        }
    }

    fn build_node(&self, inner_html: &str) -> Option<Element> {
        let document = self.container.owner_document()?;
        match document.create_element("div") {
            Ok(node) => {
                node.set_class_name(COMMENT_CLASS);
                node.set_inner_html(inner_html);
                Some(node)
            }
            Err(err) => {
                log::error!("failed to create comment node: {err:?}");
                None
            }
        }
    }
}

impl CommentList for DomCommentList {
    fn has_comment(&self) -> bool {
        self.first_comment().is_some()
    }

    fn insert_before_first(&self, inner_html: &str) {
        let Some(first) = self.first_comment() else {
            self.append(inner_html);
            return;
        };
        let (Some(node), Some(parent)) = (self.build_node(inner_html), first.parent_node()) else {
            return;
        };
        if let Err(err) = parent.insert_before(&node, Some(&first)) {
            log::error!("failed to insert comment: {err:?}");
        }
    }

    fn append(&self, inner_html: &str) {
        let Some(node) = self.build_node(inner_html) else {
            return;
        };
        if let Err(err) = self.container.append_child(&node) {
            log::error!("failed to append comment: {err:?}");
        }
    }
}

// =============================================================
// Search
// =============================================================

pub struct DomSearchInput {
    input: HtmlInputElement,
}

impl DomSearchInput {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }

    pub fn element(&self) -> &HtmlInputElement {
        &self.input
    }
}

impl SearchInput for DomSearchInput {
    fn value(&self) -> String {
        self.input.value()
    }
}

pub struct DomSuggestionsPanel {
    panel: HtmlElement,
}

impl DomSuggestionsPanel {
    pub fn new(panel: HtmlElement) -> Self {
        Self { panel }
    }
}

impl SuggestionsPanel for DomSuggestionsPanel {
    fn hide(&self) {
        if let Err(err) = self.panel.style().set_property("display", "none") {
            log::warn!("failed to hide suggestions: {err:?}");
        }
    }
}

/// Navigates the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::error!("navigation to {url} failed: {err:?}");
        }
    }
}
