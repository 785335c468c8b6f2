//! Like toggle controller.
//!
//! STATE MACHINE
//! =============
//! `Idle -> Pending -> Idle` per button. The button's disabled flag is the
//! `Pending` marker: it is set before the request goes out and cleared by a
//! guard on every exit path, so a second click on the same button can never
//! overlap the first. Different buttons are fully independent.
//!
//! The rendered count is always overwritten with the server's number, never
//! incremented locally, and a failed request leaves count and liked state
//! exactly as they were.

#[cfg(test)]
#[path = "like_test.rs"]
mod like_test;

use std::rc::Rc;

use super::guard::DisabledGuard;
use crate::net::api::{ApiRequest, HttpClient, NetworkError};
use crate::net::types::{self, LikeResponse, LikeTarget};
use crate::notify::{Notify, Severity};
use crate::page::LikeButton;

/// Which path a click took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LikeOutcome {
    /// `data-type` / `data-id` missing or malformed; nothing was sent.
    MissingTarget,
    /// A request for this button is already in flight.
    Busy,
    /// The server accepted the toggle; `count` is what is now rendered.
    Applied { liked: bool, count: Option<i64> },
    /// The server answered `success: false`.
    Rejected { message: String },
    /// Transport or decode failure.
    Failed(NetworkError),
}

/// User-facing strings the controller needs.
#[derive(Clone, Debug)]
pub struct LikeMessages {
    pub failed: String,
    pub network_error: String,
}

/// Drives one like button.
pub struct LikeController<C, B> {
    client: Rc<C>,
    notifier: Rc<dyn Notify>,
    button: B,
    endpoint: String,
    messages: LikeMessages,
}

impl<C: HttpClient, B: LikeButton> LikeController<C, B> {
    pub fn new(client: Rc<C>, notifier: Rc<dyn Notify>, button: B, endpoint: &str, messages: LikeMessages) -> Self {
        Self { client, notifier, button, endpoint: endpoint.to_owned(), messages }
    }

    pub fn button(&self) -> &B {
        &self.button
    }

    /// Handle a click on the button.
    pub async fn click(&self) -> LikeOutcome {
        let type_attr = self.button.data("type");
        let id_attr = self.button.data("id");
        let Some(target) = LikeTarget::from_attributes(type_attr.as_deref(), id_attr.as_deref()) else {
            log::error!("like button is missing target information (type={type_attr:?}, id={id_attr:?})");
            return LikeOutcome::MissingTarget;
        };

        if self.button.is_disabled() {
            return LikeOutcome::Busy;
        }
        let _pending = DisabledGuard::engage(&self.button);

        match self.request(&target).await {
            Ok(resp) if resp.success => {
                let liked = resp.liked.unwrap_or(false);
                if let Some(count) = resp.like_count {
                    self.button.set_count(count);
                }
                self.button.set_liked(liked);
                log::debug!(
                    "{} {} liked={liked} count={:?}",
                    target.target_type.as_str(),
                    target.target_id,
                    resp.like_count
                );
                LikeOutcome::Applied { liked, count: resp.like_count }
            }
            Ok(resp) => {
                let message = types::message_or(resp.message.as_deref(), &self.messages.failed).to_owned();
                self.notifier.show(&message, Severity::Error);
                LikeOutcome::Rejected { message }
            }
            Err(err) => {
                log::error!("like request for {} {} failed: {err}", target.target_type.as_str(), target.target_id);
                self.notifier.show(&self.messages.network_error, Severity::Error);
                LikeOutcome::Failed(err)
            }
        }
    }

    async fn request(&self, target: &LikeTarget) -> Result<LikeResponse, NetworkError> {
        let request = ApiRequest::json(&self.endpoint, target)?;
        let body = self.client.send(request).await?;
        types::decode(body)
    }
}
