//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire. Missing request fields fall back to their
//! defaults so the domain rules, not the JSON decoder, decide what is invalid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub name: String,
    pub surname: String,
    pub social_security_number: String,
}

/// Public representation of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub social_security_number: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub author_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTitleRequest {
    pub title: String,
}

/// Query string of `GET /api/posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPostQuery {
    #[serde(default = "include_author_default")]
    pub include_author: bool,
}

fn include_author_default() -> bool {
    true
}

/// Public representation of a post. `author` is null unless it was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: Option<AuthorResponse>,
}
