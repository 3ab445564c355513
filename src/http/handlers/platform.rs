use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::platform::{
        create_platform, delete_platform, get_platform_by_id, list_platforms, update_platform,
    },
    errors::ErrorResponse,
    models::{
        Platform,
        platform::{PlatformDetail, PlatformPayload},
    },
    permissions::require_admin,
    state::AppState,
};

pub async fn list_platforms_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Platform>>, ErrorResponse> {
    match list_platforms(state.postgres.clone()).await {
        Ok(platforms) => Ok(Json(platforms)),
        Err(err) => {
            tracing::error!("Error listing platforms: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn create_platform_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<PlatformPayload>,
) -> Result<(StatusCode, Json<Platform>), ErrorResponse> {
    require_admin(&claims).map_err(|e| e.to_response())?;
    payload.validate().map_err(|e| e.to_response())?;

    match create_platform(payload, state.postgres.clone()).await {
        Ok(platform) => {
            tracing::info!("Platform created: {}", platform.name);
            Ok((StatusCode::CREATED, Json(platform)))
        }
        Err(err) => {
            tracing::error!("Error creating platform: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_platform_handler(
    State(state): State<AppState>,
    Path(platform_id): Path<Uuid>,
) -> Result<Json<PlatformDetail>, ErrorResponse> {
    get_platform_by_id(platform_id, state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| e.to_response())
}

pub async fn update_platform_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(platform_id): Path<Uuid>,
    Json(payload): Json<PlatformPayload>,
) -> Result<Json<Platform>, ErrorResponse> {
    require_admin(&claims).map_err(|e| e.to_response())?;
    payload.validate().map_err(|e| e.to_response())?;

    match update_platform(platform_id, payload, state.postgres.clone()).await {
        Ok(platform) => Ok(Json(platform)),
        Err(err) => {
            tracing::error!("Error updating platform {}: {}", platform_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_platform_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(platform_id): Path<Uuid>,
) -> Result<StatusCode, ErrorResponse> {
    require_admin(&claims).map_err(|e| e.to_response())?;

    match delete_platform(platform_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            tracing::error!("Error deleting platform {}: {}", platform_id, err);
            Err(err.to_response())
        }
    }
}
