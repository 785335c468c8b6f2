//! HTTP adapter for the blog JSON API.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Everywhere else the [`HttpClient`] trait is implemented by test doubles, so
//! controller logic never depends on the browser.
//!
//! ERROR HANDLING
//! ==============
//! A single attempt per call, no retries. The body is parsed as JSON whatever
//! the HTTP status, because the API reports failures as `{"success": false}`
//! payloads. Transport failures and unparseable bodies both surface as
//! [`NetworkError`]; the caller decides what the user sees.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::Value;

use crate::config::CommentEncoding;

/// Failure of a single request before a usable JSON body was obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("request encoding failed: {0}")]
    Encode(String),
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("response decoding failed: {0}")]
    Decode(String),
}

/// HTTP method subset the API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request body; the variant decides the wire encoding.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Empty,
    /// `application/json`.
    Json(Value),
    /// `multipart/form-data`; the browser picks the boundary.
    Multipart(Vec<(String, String)>),
    /// `application/x-www-form-urlencoded`.
    UrlEncoded(Vec<(String, String)>),
}

impl Payload {
    /// `Content-Type` header to send explicitly, if any.
    ///
    /// Multipart bodies return `None`: the header must carry a boundary that
    /// only the browser knows.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty | Self::Multipart(_) => None,
            Self::Json(_) => Some("application/json"),
            Self::UrlEncoded(_) => Some("application/x-www-form-urlencoded"),
        }
    }
}

/// One call against the API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub endpoint: String,
    pub method: Method,
    pub payload: Payload,
}

impl ApiRequest {
    /// `POST` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Encode`] if `body` cannot be represented as JSON.
    pub fn json<T: Serialize>(endpoint: &str, body: &T) -> Result<Self, NetworkError> {
        let value = serde_json::to_value(body).map_err(|e| NetworkError::Encode(e.to_string()))?;
        Ok(Self { endpoint: endpoint.to_owned(), method: Method::Post, payload: Payload::Json(value) })
    }

    /// `POST` with form fields in the given encoding.
    pub fn form(endpoint: &str, fields: Vec<(String, String)>, encoding: CommentEncoding) -> Self {
        let payload = match encoding {
            CommentEncoding::Multipart => Payload::Multipart(fields),
            CommentEncoding::UrlEncoded => Payload::UrlEncoded(fields),
        };
        Self { endpoint: endpoint.to_owned(), method: Method::Post, payload }
    }
}

/// Encode form fields as `application/x-www-form-urlencoded`.
pub fn urlencode_fields(fields: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

/// Transport seam used by every controller.
///
/// Single-threaded by construction: futures are not required to be `Send`.
pub trait HttpClient {
    /// Send `request` and parse the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] on transport failure or a non-JSON body.
    async fn send(&self, request: ApiRequest) -> Result<Value, NetworkError>;
}

/// Browser `fetch` client backed by `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooClient;

#[cfg(feature = "hydrate")]
impl HttpClient for GlooClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, NetworkError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            Method::Get => Request::get(&request.endpoint),
            Method::Post => Request::post(&request.endpoint),
        };
        let builder = match request.payload.content_type() {
            Some(content_type) => builder.header("Content-Type", content_type),
            None => builder,
        };
        let prepared = match &request.payload {
            Payload::Empty => builder.build(),
            Payload::Json(value) => builder.json(value),
            Payload::Multipart(fields) => builder.body(form_data(fields)?),
            Payload::UrlEncoded(fields) => builder.body(urlencode_fields(fields)),
        }
        .map_err(|e| NetworkError::Encode(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        log::debug!("{} responded {}", request.endpoint, resp.status());
        resp.json::<Value>()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))
    }
}

#[cfg(feature = "hydrate")]
fn form_data(fields: &[(String, String)]) -> Result<web_sys::FormData, NetworkError> {
    let data = web_sys::FormData::new().map_err(|e| NetworkError::Encode(format!("{e:?}")))?;
    for (name, value) in fields {
        data.append_with_str(name, value)
            .map_err(|e| NetworkError::Encode(format!("{e:?}")))?;
    }
    Ok(data)
}
