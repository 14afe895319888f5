use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  ada  ", "hunter2"),
        Ok(("ada".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("ada", " pass with spaces "),
        Ok(("ada".to_owned(), " pass with spaces ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("ada", ""),
        Err("Enter both username and password.")
    );
}
