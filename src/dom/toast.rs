//! Toast host that mounts notices on `document.body`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::notify::{ToastHost, ToastSpec};

pub struct BodyToastHost {
    document: Document,
}

impl BodyToastHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ToastHost for BodyToastHost {
    type Toast = HtmlElement;

    fn mount(&self, spec: &ToastSpec) -> Option<HtmlElement> {
        let body = self.document.body()?;
        let toast: HtmlElement = match self.document.create_element("div") {
            Ok(el) => el.unchecked_into(),
            Err(err) => {
                log::error!("failed to create toast: {err:?}");
                return None;
            }
        };
        toast.set_class_name(&spec.class_name);
        toast.set_text_content(Some(&spec.text));
        toast.style().set_css_text(&spec.style);
        if let Err(err) = body.append_child(&toast) {
            log::error!("failed to mount toast: {err:?}");
            return None;
        }
        Some(toast)
    }

    fn start_exit(&self, toast: &HtmlElement, animation: &str) {
        if let Err(err) = toast.style().set_property("animation", animation) {
            log::warn!("failed to start toast exit: {err:?}");
        }
    }

    fn is_attached(&self, toast: &HtmlElement) -> bool {
        toast.parent_node().is_some()
    }

    fn remove(&self, toast: &HtmlElement) {
        toast.remove();
    }
}
