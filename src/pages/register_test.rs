use super::*;

fn valid_input() -> RegistrationInput {
    RegistrationInput {
        full_name: "Alice A".to_owned(),
        username: "alice_1".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

#[test]
fn valid_registration_passes_and_trims() {
    let mut input = valid_input();
    input.full_name = "  Alice A  ".to_owned();
    input.email = " alice@example.com ".to_owned();
    let cleaned = validate_registration(&input, true).unwrap();
    assert_eq!(cleaned.full_name, "Alice A");
    assert_eq!(cleaned.email, "alice@example.com");
}

#[test]
fn full_name_must_have_two_characters() {
    let mut input = valid_input();
    input.full_name = "A".to_owned();
    assert_eq!(validate_registration(&input, true), Err("Name must be at least 2 characters"));
}

#[test]
fn username_length_and_charset_are_enforced() {
    let mut input = valid_input();
    input.username = "ab".to_owned();
    assert_eq!(
        validate_registration(&input, true),
        Err("Username must be at least 3 characters")
    );
    input.username = "bad name!".to_owned();
    assert_eq!(
        validate_registration(&input, true),
        Err("Username can only contain letters, numbers, and underscores")
    );
}

#[test]
fn email_shape_is_checked() {
    let mut input = valid_input();
    for bad in ["plainaddress", "a@b", "a@.com", "@example.com", "a@example."] {
        input.email = bad.to_owned();
        assert_eq!(validate_registration(&input, true), Err("Invalid email address"), "{bad}");
    }
}

#[test]
fn password_rules_are_enforced() {
    let mut input = valid_input();
    input.password = "short".to_owned();
    input.confirm_password = "short".to_owned();
    assert_eq!(
        validate_registration(&input, true),
        Err("Password must be at least 6 characters")
    );

    let mut input = valid_input();
    input.confirm_password = "different".to_owned();
    assert_eq!(validate_registration(&input, true), Err("Passwords do not match"));
}

#[test]
fn avatar_is_required() {
    assert_eq!(validate_registration(&valid_input(), false), Err("Avatar is required"));
}
