//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend serializers field for field so serde
//! round-trips stay lossless. Fields the backend may omit or null carry
//! `#[serde(default)]` so older or partial responses still deserialize.
//! Timestamps stay ISO-8601 strings; this layer does no date math.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `GET /api/auth/profile/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Avatar URL, when one is set.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// JWT pair from `POST /api/token/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// New access token from `POST /api/token/refresh/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

/// Response from `POST /api/auth/register/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
    #[serde(default)]
    pub message: String,
}

/// Article summary row from the list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleListItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub status: String,
    pub is_public: bool,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Full article from the detail endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub status: String,
    pub is_public: bool,
    /// Category id, when the article is filed under one.
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Outbound payload for creating or updating an article.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    pub status: String,
    pub is_public: bool,
}

impl ArticleDraft {
    /// A private draft with only a title, the shape the create dialog sends.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            summary: None,
            category: None,
            status: "draft".to_owned(),
            is_public: false,
        }
    }
}

/// Category with its denormalized article count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub article_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Outbound payload for creating or updating a category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub color: String,
}

/// AI assistant chat session with its message history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiSession {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<AiMessage>,
    #[serde(default)]
    pub message_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One message in an AI chat session; `is_user` distinguishes the two sides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiMessage {
    pub id: i64,
    pub content: String,
    pub is_user: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The pair of messages a chat turn produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user_message: AiMessage,
    pub ai_message: AiMessage,
}

/// Response from `POST /api/ai/generate_summary/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
}

/// Response from `POST /api/ai/generate_tags/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagList {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Response from `POST /api/ai/articles/auto_complete/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub completion: String,
}
