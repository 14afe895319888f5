use super::*;

#[test]
fn token_payload_carries_both_credentials() {
    let payload = token_payload(&Credentials {
        username: "ada".to_owned(),
        password: "hunter2".to_owned(),
    });
    assert_eq!(
        payload,
        serde_json::json!({"username": "ada", "password": "hunter2"})
    );
}

#[test]
fn registration_serializes_all_fields() {
    let registration = Registration {
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
        password_confirm: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&registration).unwrap();
    assert_eq!(value["username"], "ada");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["password_confirm"], "hunter2");
}

#[test]
fn auth_paths_match_backend_routes() {
    assert_eq!(TOKEN_PATH, "/api/token/");
    assert_eq!(TOKEN_REFRESH_PATH, "/api/token/refresh/");
    assert_eq!(REGISTER_PATH, "/api/auth/register/");
    assert_eq!(LOGOUT_PATH, "/api/auth/logout/");
    assert_eq!(PROFILE_PATH, "/api/auth/profile/");
}
