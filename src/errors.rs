use axum::{Json, http::StatusCode};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use thiserror::Error;

pub type ErrorResponse = (StatusCode, Json<Value>);

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("You have already reviewed this title")]
    DuplicateReview,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Env error: {0}")]
    EnvError(String),
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), message.to_string());
        AppError::Validation(fields)
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            AppError::Validation(fields) => (StatusCode::BAD_REQUEST, Json(json!(fields))),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid username or password" })),
            ),
            AppError::InvalidToken(msg) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": msg })))
            }
            AppError::JwtError(e) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": e.to_string() })),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, Json(json!({ "error": msg }))),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))),
            AppError::DuplicateReview => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "You have already reviewed this title" })),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            ),
            AppError::PasswordHash(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            ),
            AppError::EnvError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            ),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(db) if db.is_unique_violation() => match db.constraint() {
                Some("reviews_user_title_unique") => AppError::DuplicateReview,
                Some("users_username_key") => {
                    AppError::validation("username", "Username already exists.")
                }
                Some("users_email_key") => AppError::validation("email", "Email already exists."),
                _ => AppError::DatabaseError(e.to_string()),
            },
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::BadRequest("Referenced record does not exist".into())
            }
            _ => AppError::DatabaseError(e.to_string()),
        }
    }
}
