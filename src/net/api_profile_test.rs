use super::*;

#[test]
fn profile_paths_match_backend_routes() {
    assert_eq!(PROFILE_UPDATE_PATH, "/api/auth/profile/update/");
    assert_eq!(CHANGE_PASSWORD_PATH, "/api/auth/profile/change-password/");
    assert_eq!(UPLOAD_AVATAR_PATH, "/api/auth/profile/upload-avatar/");
    assert_eq!(REMOVE_AVATAR_PATH, "/api/auth/profile/remove-avatar/");
}

#[test]
fn change_password_payload_names_both_fields() {
    assert_eq!(
        change_password_payload("old", "new"),
        serde_json::json!({"old_password": "old", "new_password": "new"})
    );
}

#[test]
fn profile_update_serializes_editable_fields() {
    let update = ProfileUpdate {
        email: "ada@example.com".to_owned(),
        bio: "writes compilers".to_owned(),
    };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["bio"], "writes compilers");
}
