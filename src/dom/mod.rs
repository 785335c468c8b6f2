//! Browser entry point and `web-sys` bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm module's start function installs the panic hook, reads the
//! optional embedded config block, starts the console logger, injects the
//! interaction stylesheet and boots the page once the DOM is ready.

pub mod bind;
pub mod elements;
pub mod page;
pub mod toast;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState};

use crate::bootstrap::{Services, attach};
use crate::config::{ConfigError, InteractionConfig};
use crate::consts::CONFIG_ELEMENT_ID;
use crate::net::api::GlooClient;
use crate::notify::{Notifier, Notify};
use crate::timer::TimeoutScheduler;
use crate::util::styles::{INTERACTION_CSS, STYLE_ELEMENT_ID};

use self::elements::WindowNavigator;
use self::page::DocumentPage;
use self::toast::BodyToastHost;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let (config, config_error) = load_config(&document);
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    if let Some(err) = config_error {
        log::error!("ignoring embedded config: {err}");
    }

    inject_styles(&document);

    if document.ready_state() == DocumentReadyState::Loading {
        let target = document.clone();
        let config = Rc::new(config);
        let mut pending = Some(document);
        bind::listen(&target, "DOMContentLoaded", move |_| {
            if let Some(document) = pending.take() {
                boot(&document, &config);
            }
        });
    } else {
        boot(&document, &config);
    }
}

/// Embedded config, or defaults plus the parse error when the block is malformed.
fn load_config(document: &Document) -> (InteractionConfig, Option<ConfigError>) {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match raw {
        None => (InteractionConfig::default(), None),
        Some(raw) => match InteractionConfig::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (InteractionConfig::default(), Some(err)),
        },
    }
}

fn inject_styles(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::warn!("no <head>; interaction styles not injected");
        return;
    };
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(err) => {
            log::error!("failed to create style element: {err:?}");
            return;
        }
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(INTERACTION_CSS));
    if let Err(err) = head.append_child(&style) {
        log::error!("failed to inject interaction styles: {err:?}");
    }
}

fn boot(document: &Document, config: &InteractionConfig) {
    let notifier = Notifier::new(BodyToastHost::new(document.clone()), TimeoutScheduler, &config.timings);
    let services = Services {
        client: Rc::new(GlooClient),
        notifier: Rc::new(notifier) as Rc<dyn Notify>,
        scheduler: TimeoutScheduler,
        navigator: WindowNavigator,
    };
    let page = DocumentPage::new(document.clone(), config.selectors.clone());
    bind::bind(attach(&page, config, services));
}
