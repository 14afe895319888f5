//! AI writing-assistant endpoints.
//!
//! DESIGN
//! ======
//! Generation calls block on the backend's LLM provider, so each carries a
//! timeout matched to how long that kind of call is allowed to run: a full
//! chat turn up to 120 s, outline/summary/rewrites 60 s, tag and completion
//! suggestions 30 s. Everything else in the crate keeps the 10 s default.

#[cfg(test)]
#[path = "api_ai_test.rs"]
mod api_ai_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::net::http::{self, RequestDescriptor};
use crate::net::types::{AiSession, ChatExchange, Completion, Summary, TagList};
use crate::state::session::SessionState;

pub(crate) const AI_SESSIONS_PATH: &str = "/api/ai/sessions/";
pub(crate) const GENERATE_OUTLINE_PATH: &str = "/api/ai/generate_outline/";
pub(crate) const IMPROVE_ARTICLE_PATH: &str = "/api/ai/improve_article/";
pub(crate) const GENERATE_SUMMARY_PATH: &str = "/api/ai/generate_summary/";
pub(crate) const GENERATE_TAGS_PATH: &str = "/api/ai/generate_tags/";
pub(crate) const AUTO_COMPLETE_PATH: &str = "/api/ai/articles/auto_complete/";

pub(crate) const CHAT_TIMEOUT_MS: u32 = 120_000;
pub(crate) const GENERATE_TIMEOUT_MS: u32 = 60_000;
pub(crate) const SUGGEST_TIMEOUT_MS: u32 = 30_000;

pub(crate) fn ai_session_endpoint(id: i64) -> String {
    format!("/api/ai/sessions/{id}/")
}

pub(crate) fn chat_endpoint(session_id: i64) -> String {
    format!("/api/ai/sessions/{session_id}/chat/")
}

/// List the user's chat sessions.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn list_sessions(session: RwSignal<SessionState>) -> Result<Vec<AiSession>, ApiError> {
    http::send(session, RequestDescriptor::get(AI_SESSIONS_PATH)).await
}

/// Create a chat session with the given title.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn create_session(
    session: RwSignal<SessionState>,
    title: &str,
) -> Result<AiSession, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(AI_SESSIONS_PATH, serde_json::json!({ "title": title })),
    )
    .await
}

/// Delete a chat session and its history.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn delete_session(session: RwSignal<SessionState>, id: i64) -> Result<(), ApiError> {
    http::send_unit(session, RequestDescriptor::delete(ai_session_endpoint(id))).await
}

/// Send one chat message and get the stored user/assistant message pair.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn chat(
    session: RwSignal<SessionState>,
    ai_session_id: i64,
    message: &str,
) -> Result<ChatExchange, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(
            chat_endpoint(ai_session_id),
            serde_json::json!({ "message": message }),
        )
        .with_timeout(CHAT_TIMEOUT_MS),
    )
    .await
}

/// Generate an article outline for a topic. The outline shape is
/// backend-defined, so it stays open-ended JSON.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn generate_outline(
    session: RwSignal<SessionState>,
    topic: &str,
    style: &str,
) -> Result<serde_json::Value, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(
            GENERATE_OUTLINE_PATH,
            serde_json::json!({ "topic": topic, "style": style }),
        )
        .with_timeout(GENERATE_TIMEOUT_MS),
    )
    .await
}

/// Ask for an improved rewrite of article content.
/// `improve_type` is one of the backend's `grammar`/`style`/`expand`.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn improve_article(
    session: RwSignal<SessionState>,
    content: &str,
    improve_type: &str,
) -> Result<serde_json::Value, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(
            IMPROVE_ARTICLE_PATH,
            serde_json::json!({ "content": content, "improve_type": improve_type }),
        )
        .with_timeout(GENERATE_TIMEOUT_MS),
    )
    .await
}

/// Summarize article content in at most `max_length` characters.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn generate_summary(
    session: RwSignal<SessionState>,
    content: &str,
    max_length: u32,
) -> Result<Summary, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(
            GENERATE_SUMMARY_PATH,
            serde_json::json!({ "content": content, "max_length": max_length }),
        )
        .with_timeout(GENERATE_TIMEOUT_MS),
    )
    .await
}

/// Suggest tags for article content.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn generate_tags(
    session: RwSignal<SessionState>,
    content: &str,
    count: u32,
) -> Result<TagList, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(
            GENERATE_TAGS_PATH,
            serde_json::json!({ "content": content, "count": count }),
        )
        .with_timeout(SUGGEST_TIMEOUT_MS),
    )
    .await
}

/// Continue writing from a prompt, given surrounding article context.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn auto_complete(
    session: RwSignal<SessionState>,
    prompt: &str,
    context: &str,
) -> Result<Completion, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(
            AUTO_COMPLETE_PATH,
            serde_json::json!({ "prompt": prompt, "context": context }),
        )
        .with_timeout(SUGGEST_TIMEOUT_MS),
    )
    .await
}
