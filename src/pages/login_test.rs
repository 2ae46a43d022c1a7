use super::*;

#[test]
fn validate_login_input_trims_the_identifier() {
    assert_eq!(
        validate_login_input("  alice  ", "pw"),
        Ok(("alice".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    let expected = Err("Enter your email or username and your password.");
    assert_eq!(validate_login_input("", "pw"), expected);
    assert_eq!(validate_login_input("   ", "pw"), expected);
    assert_eq!(validate_login_input("alice", ""), expected);
}
