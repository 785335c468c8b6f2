//! [`PageRoot`] over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::elements::{DomCommentForm, DomCommentList, DomLikeButton, DomSearchInput, DomSuggestionsPanel};
use crate::bootstrap::PageRoot;
use crate::config::Selectors;

pub struct DocumentPage {
    document: Document,
    selectors: Selectors,
}

impl DocumentPage {
    pub fn new(document: Document, selectors: Selectors) -> Self {
        Self { document, selectors }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("invalid selector {selector}: {err:?}");
                None
            }
        }
    }

    fn query_as<T: JsCast>(&self, selector: &str) -> Option<T> {
        let element = self.query(selector)?;
        match element.dyn_into::<T>() {
            Ok(typed) => Some(typed),
            Err(_) => {
                log::warn!("{selector} matched an element of the wrong kind");
                None
            }
        }
    }
}

impl PageRoot for DocumentPage {
    type Form = DomCommentForm;
    type List = DomCommentList;
    type Button = DomLikeButton;
    type SearchForm = HtmlFormElement;
    type Input = DomSearchInput;
    type Panel = DomSuggestionsPanel;

    fn comment_form(&self) -> Option<DomCommentForm> {
        let form: HtmlFormElement = self.query_as(&self.selectors.comment_form)?;
        let submit = match form.query_selector(&self.selectors.submit_button) {
            Ok(Some(submit)) => submit,
            Ok(None) => {
                log::warn!("comment form has no {} button", self.selectors.submit_button);
                return None;
            }
            Err(err) => {
                log::warn!("invalid selector {}: {err:?}", self.selectors.submit_button);
                return None;
            }
        };
        Some(DomCommentForm::new(form, submit))
    }

    fn comment_list(&self) -> Option<DomCommentList> {
        let container = self.query(&self.selectors.comment_list)?;
        Some(DomCommentList::new(container, &self.selectors.comment_item))
    }

    fn like_buttons(&self) -> Vec<DomLikeButton> {
        let nodes = match self.document.query_selector_all(&self.selectors.like_button) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("invalid selector {}: {err:?}", self.selectors.like_button);
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| match node.dyn_into::<HtmlElement>() {
                Ok(element) => Some(element),
                Err(_) => None,
            })
            .map(|element| DomLikeButton::new(element, &self.selectors.like_count))
            .collect()
    }

    fn search(&self) -> Option<(HtmlFormElement, DomSearchInput)> {
        let form: HtmlFormElement = self.query_as(&self.selectors.search_form)?;
        let input: HtmlInputElement = self.query_as(&self.selectors.search_input)?;
        Some((form, DomSearchInput::new(input)))
    }

    fn suggestions_panel(&self) -> Option<DomSuggestionsPanel> {
        self.query_as::<HtmlElement>(&self.selectors.suggestions)
            .map(DomSuggestionsPanel::new)
    }
}
