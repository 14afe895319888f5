use super::*;
use crate::net::types::TokenPair;

fn user(id: i64, name: &str) -> User {
    User {
        id,
        username: name.to_owned(),
        email: String::new(),
        avatar: None,
        bio: String::new(),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn default_session_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
    assert_eq!(state.auth_expired_seq, 0);
}

#[test]
fn restore_with_token_is_authenticated_without_user() {
    let state = SessionState::restore(Some("stale.jwt".to_owned()));
    assert!(state.is_authenticated());
    // Valid transient state: token known, profile not yet fetched.
    assert_eq!(state.user, None);
}

#[test]
fn restore_without_token_matches_default() {
    assert_eq!(SessionState::restore(None), SessionState::default());
}

#[test]
fn login_application_populates_token_then_user() {
    let mut state = SessionState::default();
    state.set_tokens(&TokenPair {
        access: "acc".to_owned(),
        refresh: "ref".to_owned(),
    });
    assert!(state.is_authenticated());
    assert_eq!(state.user, None);

    state.set_user(user(1, "ada"));
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("ada"));
}

#[test]
fn clear_auth_is_idempotent() {
    let mut state = SessionState::default();
    state.set_tokens(&TokenPair {
        access: "acc".to_owned(),
        refresh: "ref".to_owned(),
    });
    state.set_user(user(1, "ada"));

    state.clear_auth();
    let cleared = state.clone();
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
    assert!(state.refresh.is_empty());

    state.clear_auth();
    assert_eq!(state, cleared);
}

#[test]
fn note_auth_expired_clears_and_bumps_seq_once() {
    let mut state = SessionState::default();
    state.set_tokens(&TokenPair {
        access: "acc".to_owned(),
        refresh: "ref".to_owned(),
    });
    state.set_user(user(1, "ada"));

    state.note_auth_expired();
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
    assert_eq!(state.auth_expired_seq, 1);

    // A second 401 is a distinct event with its own bump.
    state.note_auth_expired();
    assert_eq!(state.auth_expired_seq, 2);
}

#[test]
fn set_access_replaces_only_the_access_token() {
    let mut state = SessionState::default();
    state.set_tokens(&TokenPair {
        access: "old".to_owned(),
        refresh: "keep".to_owned(),
    });
    state.set_access("new");
    assert_eq!(state.token, "new");
    assert_eq!(state.refresh, "keep");
}

#[test]
fn credential_rejected_message_reads_detail_field() {
    assert_eq!(
        credential_rejected_message(r#"{"detail":"No active account found"}"#),
        "No active account found"
    );
}

#[test]
fn credential_rejected_message_reads_error_field() {
    assert_eq!(
        credential_rejected_message(r#"{"error":"bad password"}"#),
        "bad password"
    );
}

#[test]
fn credential_rejected_message_falls_back_on_garbage() {
    assert_eq!(
        credential_rejected_message("<html>502</html>"),
        "invalid username or password"
    );
    assert_eq!(
        credential_rejected_message(r#"{"unrelated":1}"#),
        "invalid username or password"
    );
}
