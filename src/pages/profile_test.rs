use super::*;

#[test]
fn account_details_are_trimmed_and_checked() {
    assert_eq!(
        validate_account(" Alice A ", " alice@example.com "),
        Ok(("Alice A".to_owned(), "alice@example.com".to_owned()))
    );
    assert_eq!(validate_account("A", "alice@example.com"), Err("Name must be at least 2 characters"));
    assert_eq!(validate_account("Alice", "not-an-email"), Err("Invalid email address"));
}

#[test]
fn password_change_requires_all_rules() {
    assert_eq!(validate_password_change("", "secret1", "secret1"), Err("Current password is required"));
    assert_eq!(
        validate_password_change("old", "short", "short"),
        Err("Password must be at least 6 characters")
    );
    assert_eq!(
        validate_password_change("old", "secret1", "different"),
        Err("Passwords do not match")
    );
    assert_eq!(validate_password_change("old", "secret1", "secret1"), Ok(()));
}
