use uuid::Uuid;
use watchlist_be::{
    errors::AppError,
    models::{
        platform::PlatformPayload,
        review::ReviewPayload,
        title::TitlePayload,
        user::RegisterPayload,
    },
};

fn title_payload(title: &str, storyline: &str) -> TitlePayload {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "storyline": storyline,
        "platformId": Uuid::new_v4(),
    }))
    .unwrap()
}

fn register_payload(username: &str, email: &str, password: &str, password2: &str) -> RegisterPayload {
    RegisterPayload {
        username: username.into(),
        email: email.into(),
        password: password.into(),
        password2: password2.into(),
    }
}

fn validation_fields(err: AppError) -> std::collections::BTreeMap<String, String> {
    match err {
        AppError::Validation(fields) => fields,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_title_must_be_at_least_four_characters() {
    let err = title_payload("abc", "a storyline").validate().unwrap_err();
    let fields = validation_fields(err);
    assert!(fields.contains_key("title"));
    assert!(fields["title"].contains("at least 4 characters"));

    // Exactly four is fine
    assert!(title_payload("abcd", "a storyline").validate().is_ok());
}

#[test]
fn test_title_cannot_equal_storyline() {
    let err = title_payload("Inception", "Inception").validate().unwrap_err();
    let fields = validation_fields(err);
    assert!(fields["title"].contains("cannot be the same"));

    assert!(title_payload("Inception", "A heist in dreams").validate().is_ok());
}

#[test]
fn test_register_rejects_password_mismatch() {
    // Mismatch fails regardless of the other fields
    let err = register_payload("u1", "u1@example.com", "a", "b")
        .validate()
        .unwrap_err();
    let fields = validation_fields(err);
    assert_eq!(fields["password"], "Passwords do not match.");
}

#[test]
fn test_register_rejects_bad_email() {
    for email in ["plainaddress", "missing@tld", "@nodomain.com", "two@@at.com", "sp ace@x.com"] {
        let err = register_payload("alice", email, "pw", "pw")
            .validate()
            .unwrap_err();
        let fields = validation_fields(err);
        assert!(fields.contains_key("email"), "accepted bad email {email}");
    }

    assert!(
        register_payload("alice", "alice@example.com", "pw", "pw")
            .validate()
            .is_ok()
    );
}

#[test]
fn test_register_rejects_bad_username() {
    let err = register_payload("ab", "a@b.com", "pw", "pw")
        .validate()
        .unwrap_err();
    assert!(validation_fields(err).contains_key("username"));

    let err = register_payload("has space", "a@b.com", "pw", "pw")
        .validate()
        .unwrap_err();
    assert!(validation_fields(err).contains_key("username"));

    assert!(register_payload("alice_01", "a@b.com", "pw", "pw").validate().is_ok());
}

#[test]
fn test_register_collects_multiple_field_errors() {
    let err = register_payload("x", "not-an-email", "a", "b")
        .validate()
        .unwrap_err();
    let fields = validation_fields(err);
    assert!(fields.contains_key("username"));
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("password"));
}

#[test]
fn test_review_rating_bounds() {
    for rating in [0, 6, -1] {
        let payload = ReviewPayload {
            rating,
            description: None,
            active: true,
        };
        assert!(payload.validate().is_err(), "accepted rating {rating}");
    }

    for rating in 1..=5 {
        let payload = ReviewPayload {
            rating,
            description: Some("fine".into()),
            active: true,
        };
        assert!(payload.validate().is_ok());
    }
}

#[test]
fn test_platform_name_required() {
    let payload = PlatformPayload {
        name: "  ".into(),
        about: String::new(),
        website: String::new(),
    };
    assert!(payload.validate().is_err());
}
