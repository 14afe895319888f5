use super::*;

#[test]
fn validate_register_input_builds_payload() {
    let registration =
        validate_register_input(" ada ", " ada@example.com ", "hunter22", "hunter22").unwrap();
    assert_eq!(registration.username, "ada");
    assert_eq!(registration.email, "ada@example.com");
    assert_eq!(registration.password, "hunter22");
    assert_eq!(registration.password_confirm, "hunter22");
}

#[test]
fn validate_register_input_requires_core_fields() {
    assert_eq!(
        validate_register_input("", "a@b.com", "x", "x"),
        Err("Fill in username, email, and password.")
    );
    assert_eq!(
        validate_register_input("ada", "  ", "x", "x"),
        Err("Fill in username, email, and password.")
    );
    assert_eq!(
        validate_register_input("ada", "a@b.com", "", ""),
        Err("Fill in username, email, and password.")
    );
}

#[test]
fn validate_register_input_rejects_mismatched_passwords() {
    assert_eq!(
        validate_register_input("ada", "a@b.com", "one", "two"),
        Err("Passwords do not match.")
    );
}
