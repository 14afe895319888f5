//! Category CRUD endpoints.

#[cfg(test)]
#[path = "api_categories_test.rs"]
mod api_categories_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::net::http::{self, RequestDescriptor};
use crate::net::types::{Category, CategoryDraft};
use crate::state::session::SessionState;

pub(crate) const CATEGORIES_PATH: &str = "/api/categories/categories/";

pub(crate) fn category_endpoint(id: i64) -> String {
    format!("/api/categories/categories/{id}/")
}

/// List the current user's categories.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn list_categories(session: RwSignal<SessionState>) -> Result<Vec<Category>, ApiError> {
    http::send(session, RequestDescriptor::get(CATEGORIES_PATH)).await
}

/// Create a category.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn create_category(
    session: RwSignal<SessionState>,
    draft: &CategoryDraft,
) -> Result<Category, ApiError> {
    let payload = serde_json::to_value(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    http::send(session, RequestDescriptor::post(CATEGORIES_PATH, payload)).await
}

/// Rename or recolor a category.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn update_category(
    session: RwSignal<SessionState>,
    id: i64,
    draft: &CategoryDraft,
) -> Result<Category, ApiError> {
    let payload = serde_json::to_value(draft).map_err(|e| ApiError::Network(e.to_string()))?;
    http::send(session, RequestDescriptor::put(category_endpoint(id), payload)).await
}

/// Delete a category.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn delete_category(session: RwSignal<SessionState>, id: i64) -> Result<(), ApiError> {
    http::send_unit(session, RequestDescriptor::delete(category_endpoint(id))).await
}
