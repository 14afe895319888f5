use super::*;

#[test]
fn network_error_displays_reason() {
    let err = ApiError::Network("timed out".to_owned());
    assert_eq!(err.to_string(), "network error: timed out");
}

#[test]
fn http_error_displays_status_and_body() {
    let err = ApiError::Http {
        status: 404,
        body: "{\"detail\":\"Not found.\"}".to_owned(),
    };
    assert_eq!(err.to_string(), "http 404: {\"detail\":\"Not found.\"}");
}

#[test]
fn auth_error_displays_message() {
    let err = ApiError::Auth("bad credentials".to_owned());
    assert_eq!(err.to_string(), "authentication failed: bad credentials");
}

#[test]
fn is_unauthorized_only_for_401() {
    let unauthorized = ApiError::Http {
        status: 401,
        body: String::new(),
    };
    let forbidden = ApiError::Http {
        status: 403,
        body: String::new(),
    };
    assert!(unauthorized.is_unauthorized());
    assert!(!forbidden.is_unauthorized());
    assert!(!ApiError::Network("down".to_owned()).is_unauthorized());
    assert!(!ApiError::Auth("nope".to_owned()).is_unauthorized());
}
