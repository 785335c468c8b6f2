//! Event wiring from DOM anchors to controllers.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `Closure::forget`. Async handlers run on `spawn_local`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use super::elements::WindowNavigator;
use super::page::DocumentPage;
use crate::bootstrap::Attached;
use crate::controllers::comment::SubmitOutcome;
use crate::controllers::like::LikeOutcome;
use crate::net::api::GlooClient;
use crate::timer::TimeoutScheduler;

pub type PageControllers = Attached<DocumentPage, GlooClient, TimeoutScheduler, WindowNavigator>;

/// Attach `handler` to `event` on `target` for the rest of the page's life.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to listen for {event}: {err:?}");
    }
    closure.forget();
}

/// Wire every attached controller to its element's events.
pub fn bind(attached: PageControllers) {
    if let Some(comments) = attached.comments {
        let target = comments.form().form().clone();
        listen(&target, "submit", move |event| {
            event.prevent_default();
            let comments = Rc::clone(&comments);
            wasm_bindgen_futures::spawn_local(async move {
                match comments.submit().await {
                    SubmitOutcome::Failed(err) => log::warn!("comment submit failed: {err}"),
                    outcome => log::debug!("comment submit: {outcome:?}"),
                }
            });
        });
    }

    for like in attached.likes {
        let target = like.button().element().clone();
        listen(&target, "click", move |event| {
            event.prevent_default();
            let like = Rc::clone(&like);
            wasm_bindgen_futures::spawn_local(async move {
                match like.click().await {
                    LikeOutcome::Failed(err) => log::warn!("like toggle failed: {err}"),
                    outcome => log::debug!("like toggle: {outcome:?}"),
                }
            });
        });
    }

    if let Some((form, search)) = attached.search {
        let on_submit = Rc::clone(&search);
        listen(&form, "submit", move |event| {
            event.prevent_default();
            log::debug!("search submit: {:?}", on_submit.submit());
        });

        let input = search.input().element().clone();
        listen(&input, "input", move |_| search.input_changed());
    }
}
