use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::{
    auth::{generate_token_pair, refresh_access_token, verify_password},
    db::user::{create_user, get_user_by_username},
    errors::{AppError, ErrorResponse},
    models::user::{LoginPayload, RefreshPayload, RegisterPayload, TokenPair},
    state::AppState,
};

pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<Value>), ErrorResponse> {
    payload.validate().map_err(|e| e.to_response())?;

    match create_user(payload, state.postgres.clone()).await {
        Ok(user) => {
            let token = generate_token_pair(&user).map_err(|e| {
                tracing::error!("Error issuing tokens for new user: {}", e);
                e.to_response()
            })?;

            tracing::info!("Registered user: {}", user.username);

            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "username": user.username,
                    "email": user.email,
                    "message": "User registered successfully",
                    "token": token,
                })),
            ))
        }
        Err(err) => {
            tracing::error!("Error registering user: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn obtain_token_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<TokenPair>, ErrorResponse> {
    let user = get_user_by_username(&payload.username, state.postgres.clone())
        .await
        .map_err(|_| AppError::InvalidCredentials.to_response())?;

    if !verify_password(&user.password_hash, &payload.password) {
        return Err(AppError::InvalidCredentials.to_response());
    }

    let pair = generate_token_pair(&user).map_err(|e| {
        tracing::error!("Error issuing tokens: {}", e);
        e.to_response()
    })?;

    Ok(Json(pair))
}

pub async fn refresh_token_handler(
    Json(payload): Json<RefreshPayload>,
) -> Result<Json<Value>, ErrorResponse> {
    match refresh_access_token(&payload.refresh) {
        Ok(access) => Ok(Json(json!({ "access": access }))),
        Err(err) => Err(err.to_response()),
    }
}
