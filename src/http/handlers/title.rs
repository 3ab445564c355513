use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::title::{create_title, delete_title, get_title_by_id, list_titles, update_title},
    errors::ErrorResponse,
    models::{
        Title,
        title::{TitlePayload, TitleQuery},
    },
    pagination::Paginated,
    permissions::require_admin,
    state::AppState,
};

pub async fn list_titles_handler(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Paginated<Title>>, ErrorResponse> {
    match list_titles(query, state.postgres.clone()).await {
        Ok(page) => Ok(Json(page)),
        Err(err) => {
            tracing::error!("Error listing titles: {}", err);
            Err(err.to_response())
        }
    }
}

// Any authenticated user may add a title; changing or removing one is
// admin-only.
pub async fn create_title_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<TitlePayload>,
) -> Result<(StatusCode, Json<Title>), ErrorResponse> {
    payload.validate().map_err(|e| e.to_response())?;

    match create_title(payload, state.postgres.clone()).await {
        Ok(title) => {
            tracing::info!("Title created by {}: {}", claims.username, title.title);
            Ok((StatusCode::CREATED, Json(title)))
        }
        Err(err) => {
            tracing::error!("Error creating title: {}", err);
            Err(err.to_response())
        }
    }
}

pub async fn get_title_handler(
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
) -> Result<Json<Title>, ErrorResponse> {
    get_title_by_id(title_id, state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| e.to_response())
}

pub async fn update_title_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(title_id): Path<Uuid>,
    Json(payload): Json<TitlePayload>,
) -> Result<Json<Title>, ErrorResponse> {
    require_admin(&claims).map_err(|e| e.to_response())?;
    payload.validate().map_err(|e| e.to_response())?;

    match update_title(title_id, payload, state.postgres.clone()).await {
        Ok(title) => Ok(Json(title)),
        Err(err) => {
            tracing::error!("Error updating title {}: {}", title_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_title_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(title_id): Path<Uuid>,
) -> Result<StatusCode, ErrorResponse> {
    require_admin(&claims).map_err(|e| e.to_response())?;

    match delete_title(title_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            tracing::error!("Error deleting title {}: {}", title_id, err);
            Err(err.to_response())
        }
    }
}
