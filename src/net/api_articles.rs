//! Article CRUD endpoints.

#[cfg(test)]
#[path = "api_articles_test.rs"]
mod api_articles_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::net::http::{self, RequestDescriptor};
use crate::net::types::{Article, ArticleDraft, ArticleListItem};
use crate::state::session::SessionState;

pub(crate) const ARTICLES_PATH: &str = "/api/articles/articles/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const IMAGE_UPLOAD_PATH: &str = "/api/articles/upload/image/";

pub(crate) fn article_endpoint(id: i64) -> String {
    format!("/api/articles/articles/{id}/")
}

/// List the current user's articles.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn list_articles(
    session: RwSignal<SessionState>,
) -> Result<Vec<ArticleListItem>, ApiError> {
    http::send(session, RequestDescriptor::get(ARTICLES_PATH)).await
}

/// Fetch one article with its full content.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn get_article(session: RwSignal<SessionState>, id: i64) -> Result<Article, ApiError> {
    http::send(session, RequestDescriptor::get(article_endpoint(id))).await
}

/// Create an article from a draft.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn create_article(
    session: RwSignal<SessionState>,
    draft: &ArticleDraft,
) -> Result<Article, ApiError> {
    let payload = serde_json::to_value(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    http::send(session, RequestDescriptor::post(ARTICLES_PATH, payload)).await
}

/// Replace an article's content and metadata.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn update_article(
    session: RwSignal<SessionState>,
    id: i64,
    draft: &ArticleDraft,
) -> Result<Article, ApiError> {
    let payload = serde_json::to_value(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    http::send(session, RequestDescriptor::put(article_endpoint(id), payload)).await
}

/// Delete an article.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn delete_article(session: RwSignal<SessionState>, id: i64) -> Result<(), ApiError> {
    http::send_unit(session, RequestDescriptor::delete(article_endpoint(id))).await
}

/// Upload an inline image for article content; returns the stored URL
/// payload. Browser only.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
#[cfg(feature = "hydrate")]
pub async fn upload_image(
    session: RwSignal<SessionState>,
    file: &web_sys::File,
) -> Result<serde_json::Value, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| {
        ApiError::Network("could not build multipart form".to_owned())
    })?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach image".to_owned()))?;
    http::send_multipart(session, IMAGE_UPLOAD_PATH, form).await
}
