use axum::http::StatusCode;
use watchlist_be::errors::AppError;

#[test]
fn test_status_codes() {
    assert_eq!(
        AppError::validation("title", "too short").to_response().0,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::DuplicateReview.to_response().0,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::InvalidCredentials.to_response().0,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::Forbidden("nope".into()).to_response().0,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AppError::NotFound("gone".into()).to_response().0,
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_validation_body_is_field_keyed() {
    let (_, body) = AppError::validation("email", "Email already exists.").to_response();
    assert_eq!(body.0["email"], "Email already exists.");
}

#[test]
fn test_other_bodies_carry_single_error_message() {
    let (_, body) = AppError::NotFound("Title not found".into()).to_response();
    assert_eq!(body.0["error"], "Title not found");

    let (_, body) = AppError::DuplicateReview.to_response();
    assert!(body.0["error"].as_str().unwrap().contains("already reviewed"));
}
