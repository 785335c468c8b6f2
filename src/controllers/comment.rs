//! Comment submission controller.
//!
//! LIFECYCLE
//! =========
//! busy label + disabled -> send form -> render comment / toast -> restore.
//! The restore step is a [`SubmitGuard`] drop and runs on every exit path.
//! Form fields are only cleared after a successful post, so a failed attempt
//! never loses the visitor's draft.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use std::rc::Rc;

use super::guard::SubmitGuard;
use crate::config::CommentEncoding;
use crate::net::api::{ApiRequest, HttpClient, NetworkError};
use crate::net::types::{self, Comment, CommentResponse};
use crate::notify::{Notify, Severity};
use crate::page::{CommentForm, CommentList};
use crate::util::html::comment_markup;

/// Which path a submission took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submit button is disabled; a submission is already in flight.
    Busy,
    /// The comment was accepted. It is rendered when the response echoes it
    /// back and the page has a list.
    Posted(Option<Comment>),
    /// The server answered `success: false`.
    Rejected { message: String },
    /// Transport or decode failure.
    Failed(NetworkError),
}

/// User-facing strings the controller needs.
#[derive(Clone, Debug)]
pub struct CommentMessages {
    pub busy_label: String,
    pub posted: String,
    pub failed: String,
    pub network_error: String,
}

/// Drives the comment form and the list new comments are rendered into.
pub struct CommentController<C, F, L> {
    client: Rc<C>,
    notifier: Rc<dyn Notify>,
    form: F,
    list: Option<L>,
    endpoint: String,
    encoding: CommentEncoding,
    messages: CommentMessages,
}

impl<C: HttpClient, F: CommentForm, L: CommentList> CommentController<C, F, L> {
    pub fn new(
        client: Rc<C>,
        notifier: Rc<dyn Notify>,
        form: F,
        list: Option<L>,
        endpoint: &str,
        encoding: CommentEncoding,
        messages: CommentMessages,
    ) -> Self {
        Self { client, notifier, form, list, endpoint: endpoint.to_owned(), encoding, messages }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Handle a submit of the form. Default navigation is the caller's job.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.form.is_disabled() {
            log::debug!("comment submission already in flight");
            return SubmitOutcome::Busy;
        }
        let _busy = SubmitGuard::engage(&self.form, &self.messages.busy_label);

        let request = ApiRequest::form(&self.endpoint, self.form.fields(), self.encoding);
        match self.request(request).await {
            Ok(CommentResponse { success: true, comment, .. }) => {
                match &comment {
                    Some(comment) => self.render(comment),
                    None => log::warn!("comment accepted without an echoed comment, not rendered"),
                }
                self.form.reset();
                self.notifier.show(&self.messages.posted, Severity::Success);
                SubmitOutcome::Posted(comment)
            }
            Ok(CommentResponse { message, .. }) => {
                let message = types::message_or(message.as_deref(), &self.messages.failed).to_owned();
                self.notifier.show(&message, Severity::Error);
                SubmitOutcome::Rejected { message }
            }
            Err(err) => {
                log::error!("comment submission failed: {err}");
                self.notifier.show(&self.messages.network_error, Severity::Error);
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn request(&self, request: ApiRequest) -> Result<CommentResponse, NetworkError> {
        let body = self.client.send(request).await?;
        types::decode(body)
    }

    /// Newest first: before the first existing comment, or appended to an empty list.
    fn render(&self, comment: &Comment) {
        let Some(list) = &self.list else {
            log::warn!("no comments container on page, new comment not rendered");
            return;
        };
        let markup = comment_markup(comment);
        if list.has_comment() {
            list.insert_before_first(&markup);
        } else {
            list.append(&markup);
        }
    }
}
