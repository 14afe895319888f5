use super::*;

#[test]
fn token_pair_deserializes_from_login_response() {
    let json = r#"{"access":"aaa.bbb.ccc","refresh":"ddd.eee.fff","user":{"id":1,"username":"ada"}}"#;
    let pair: TokenPair = serde_json::from_str(json).unwrap();
    assert_eq!(pair.access, "aaa.bbb.ccc");
    assert_eq!(pair.refresh, "ddd.eee.fff");
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let json = r#"{"id":7,"username":"ada"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "");
    assert_eq!(user.avatar, None);
    assert_eq!(user.bio, "");
}

#[test]
fn article_list_item_accepts_null_timestamps() {
    let json = r#"{
        "id": 3,
        "title": "Borrow checker field notes",
        "summary": null,
        "status": "draft",
        "is_public": false,
        "author_name": "ada",
        "category_name": null,
        "created_at": "2026-01-02T03:04:05Z",
        "updated_at": "2026-01-02T03:04:05Z",
        "published_at": null
    }"#;
    let item: ArticleListItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.title, "Borrow checker field notes");
    assert_eq!(item.published_at, None);
    assert_eq!(item.category_name, None);
}

#[test]
fn article_draft_titled_is_a_private_draft() {
    let draft = ArticleDraft::titled("Untitled");
    assert_eq!(draft.status, "draft");
    assert!(!draft.is_public);
    let value = serde_json::to_value(&draft).unwrap();
    // Unset optional fields are omitted, not sent as null.
    assert!(value.get("summary").is_none());
    assert!(value.get("category").is_none());
    assert_eq!(value["title"], "Untitled");
}

#[test]
fn ai_session_defaults_messages_to_empty() {
    let json = r#"{"id":1,"title":"Outline help","message_count":0}"#;
    let session: AiSession = serde_json::from_str(json).unwrap();
    assert!(session.messages.is_empty());
}

#[test]
fn chat_exchange_carries_both_sides() {
    let json = r#"{
        "user_message": {"id":10,"content":"hi","is_user":true,"created_at":"2026-01-01T00:00:00Z"},
        "ai_message": {"id":11,"content":"hello","is_user":false,"created_at":"2026-01-01T00:00:01Z"}
    }"#;
    let exchange: ChatExchange = serde_json::from_str(json).unwrap();
    assert!(exchange.user_message.is_user);
    assert!(!exchange.ai_message.is_user);
}

#[test]
fn tag_list_defaults_to_empty() {
    let tags: TagList = serde_json::from_str("{}").unwrap();
    assert!(tags.tags.is_empty());
}
