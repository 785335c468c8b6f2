//! Page bootstrapper: find anchors, build controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the page is ready. Each controller is created only if the
//! elements it needs exist; a page without a comment form or search box is
//! normal, not an error. Event wiring lives in `dom::bind`, which consumes the
//! [`Attached`] set built here.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::rc::Rc;

use crate::config::InteractionConfig;
use crate::controllers::comment::{CommentController, CommentMessages};
use crate::controllers::like::{LikeController, LikeMessages};
use crate::controllers::search::{InertSuggestions, SearchController, SearchSettings, SuggestionsHook};
use crate::net::api::HttpClient;
use crate::notify::Notify;
use crate::page::{CommentForm, CommentList, LikeButton, Navigator, SearchInput, SuggestionsPanel};
use crate::timer::Scheduler;

/// Anchor lookup over a rendered page.
pub trait PageRoot {
    type Form: CommentForm;
    type List: CommentList;
    type Button: LikeButton;
    type SearchForm;
    type Input: SearchInput + 'static;
    type Panel: SuggestionsPanel + 'static;

    /// The comment form together with its submit button.
    fn comment_form(&self) -> Option<Self::Form>;
    fn comment_list(&self) -> Option<Self::List>;
    fn like_buttons(&self) -> Vec<Self::Button>;
    /// The search form and its input; both must exist.
    fn search(&self) -> Option<(Self::SearchForm, Self::Input)>;
    fn suggestions_panel(&self) -> Option<Self::Panel>;
}

/// Shared services every controller is built from.
pub struct Services<C, S, N> {
    pub client: Rc<C>,
    pub notifier: Rc<dyn Notify>,
    pub scheduler: S,
    pub navigator: N,
}

pub type PageCommentController<P, C> =
    CommentController<C, <P as PageRoot>::Form, <P as PageRoot>::List>;
pub type PageLikeController<P, C> = LikeController<C, <P as PageRoot>::Button>;
pub type PageSearchController<P, S, N> = SearchController<S, <P as PageRoot>::Input, N>;

/// Controllers created for one page.
pub struct Attached<P: PageRoot, C, S: Scheduler, N> {
    pub comments: Option<Rc<PageCommentController<P, C>>>,
    pub likes: Vec<Rc<PageLikeController<P, C>>>,
    pub search: Option<(P::SearchForm, Rc<PageSearchController<P, S, N>>)>,
}

impl<P: PageRoot, C, S: Scheduler, N> Attached<P, C, S, N> {
    /// One-line description of what was attached.
    pub fn summary(&self) -> String {
        format!(
            "comments={} likes={} search={}",
            self.comments.is_some(),
            self.likes.len(),
            self.search.is_some()
        )
    }
}

/// Build every controller whose anchors exist on `page`.
pub fn attach<P, C, S, N>(page: &P, config: &InteractionConfig, services: Services<C, S, N>) -> Attached<P, C, S, N>
where
    P: PageRoot,
    C: HttpClient,
    S: Scheduler,
    N: Navigator,
{
    let Services { client, notifier, scheduler, navigator } = services;
    let messages = &config.messages;

    let comments = page.comment_form().map(|form| {
        let list = page.comment_list();
        if list.is_none() {
            log::warn!("comment form found without a {} container", config.selectors.comment_list);
        }
        Rc::new(CommentController::new(
            Rc::clone(&client),
            Rc::clone(&notifier),
            form,
            list,
            &config.comment_endpoint,
            config.comment_encoding,
            CommentMessages {
                busy_label: messages.busy_label.clone(),
                posted: messages.comment_posted.clone(),
                failed: messages.comment_failed.clone(),
                network_error: messages.network_error.clone(),
            },
        ))
    });

    let like_messages = LikeMessages { failed: messages.like_failed.clone(), network_error: messages.network_error.clone() };
    let likes = page
        .like_buttons()
        .into_iter()
        .map(|button| {
            Rc::new(LikeController::new(
                Rc::clone(&client),
                Rc::clone(&notifier),
                button,
                &config.like_endpoint,
                like_messages.clone(),
            ))
        })
        .collect();

    let search = page.search().map(|(form, input)| {
        let hook: Rc<dyn SuggestionsHook> = Rc::new(InertSuggestions::new(page.suggestions_panel()));
        let controller = SearchController::new(
            input,
            navigator,
            Rc::clone(&notifier),
            hook,
            scheduler,
            SearchSettings {
                debounce: config.timings.search_debounce(),
                search_path: config.search_path.clone(),
                empty_message: messages.empty_search.clone(),
            },
        );
        (form, Rc::new(controller))
    });

    let attached = Attached { comments, likes, search };
    log::info!("interaction controllers attached: {}", attached.summary());
    attached
}
