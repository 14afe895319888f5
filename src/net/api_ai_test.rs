use super::*;
use crate::net::http::DEFAULT_TIMEOUT_MS;

#[test]
fn session_endpoints_format_expected_paths() {
    assert_eq!(ai_session_endpoint(9), "/api/ai/sessions/9/");
    assert_eq!(chat_endpoint(9), "/api/ai/sessions/9/chat/");
}

#[test]
fn generation_paths_match_backend_routes() {
    assert_eq!(AI_SESSIONS_PATH, "/api/ai/sessions/");
    assert_eq!(GENERATE_OUTLINE_PATH, "/api/ai/generate_outline/");
    assert_eq!(IMPROVE_ARTICLE_PATH, "/api/ai/improve_article/");
    assert_eq!(GENERATE_SUMMARY_PATH, "/api/ai/generate_summary/");
    assert_eq!(GENERATE_TAGS_PATH, "/api/ai/generate_tags/");
    assert_eq!(AUTO_COMPLETE_PATH, "/api/ai/articles/auto_complete/");
}

#[test]
fn timeouts_grow_with_expected_call_length() {
    assert_eq!(CHAT_TIMEOUT_MS, 120_000);
    assert_eq!(GENERATE_TIMEOUT_MS, 60_000);
    assert_eq!(SUGGEST_TIMEOUT_MS, 30_000);
    assert!(SUGGEST_TIMEOUT_MS > DEFAULT_TIMEOUT_MS);
}
