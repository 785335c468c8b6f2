//! Wire DTOs for the blog JSON API.
//!
//! DESIGN
//! ======
//! Response fields the server may omit are `Option`s so a sparse body still
//! decodes; only `success` is mandatory. Anything that fails to decode is a
//! [`NetworkError::Decode`], the same bucket as an unparseable body.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize, Serializer};

use super::api::NetworkError;

/// Kind of entity a like applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetType {
    Post,
    Comment,
    Other(String),
}

impl TargetType {
    /// Parse the `data-type` attribute; blank values are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" => None,
            "post" => Some(Self::Post),
            "comment" => Some(Self::Comment),
            other => Some(Self::Other(other.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
            Self::Other(name) => name,
        }
    }
}

impl Serialize for TargetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Identity of a likeable entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LikeTarget {
    pub target_type: TargetType,
    pub target_id: i64,
}

impl LikeTarget {
    /// Build a target from raw `data-type` / `data-id` attribute values.
    ///
    /// Returns `None` when either is missing, blank, or the id is not an integer.
    pub fn from_attributes(target_type: Option<&str>, target_id: Option<&str>) -> Option<Self> {
        let target_type = TargetType::parse(target_type?)?;
        let Ok(target_id) = target_id?.trim().parse::<i64>() else {
            return None;
        };
        Some(Self { target_type, target_id })
    }
}

/// Body of `POST /blog/api/like`.
#[derive(Clone, Debug, Deserialize)]
pub struct LikeResponse {
    pub success: bool,
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A comment as returned after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "user_name")]
    pub author_name: String,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /blog/api/comments`.
#[derive(Clone, Debug, Deserialize)]
pub struct CommentResponse {
    pub success: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Decode a parsed response body into one of the typed views above.
///
/// # Errors
///
/// Returns [`NetworkError::Decode`] when the body does not have the expected shape.
pub fn decode<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T, NetworkError> {
    serde_json::from_value(body).map_err(|e| NetworkError::Decode(e.to_string()))
}

/// Server message when present and non-empty, otherwise `fallback`.
pub fn message_or<'a>(message: Option<&'a str>, fallback: &'a str) -> &'a str {
    message.filter(|m| !m.is_empty()).unwrap_or(fallback)
}
