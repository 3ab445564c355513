use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    db::review::{
        create_review, delete_review, get_review_by_id, list_reviews_by_username,
        list_reviews_for_title, update_review,
    },
    errors::ErrorResponse,
    models::{
        Review,
        review::{ReviewPayload, ReviewQuery, UserReviewQuery},
    },
    permissions::{claims_user_id, require_owner},
    state::AppState,
};

pub async fn list_title_reviews_handler(
    State(state): State<AppState>,
    Path(title_id): Path<Uuid>,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<Vec<Review>>, ErrorResponse> {
    match list_reviews_for_title(title_id, query, state.postgres.clone()).await {
        Ok(reviews) => Ok(Json(reviews)),
        Err(err) => {
            tracing::error!("Error listing reviews for title {}: {}", title_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn create_review_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(title_id): Path<Uuid>,
    Json(payload): Json<ReviewPayload>,
) -> Result<(StatusCode, Json<Review>), ErrorResponse> {
    payload.validate().map_err(|e| e.to_response())?;
    let user_id = claims_user_id(&claims).map_err(|e| e.to_response())?;

    match create_review(
        user_id,
        claims.username.clone(),
        title_id,
        payload,
        state.postgres.clone(),
    )
    .await
    {
        Ok(review) => {
            tracing::info!(
                "Review created by {} for title {}",
                claims.username,
                title_id
            );
            Ok((StatusCode::CREATED, Json(review)))
        }
        Err(err) => {
            tracing::error!("Error creating review for title {}: {}", title_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn get_review_handler(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> Result<Json<Review>, ErrorResponse> {
    get_review_by_id(review_id, state.postgres.clone())
        .await
        .map(Json)
        .map_err(|e| e.to_response())
}

pub async fn update_review_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(review_id): Path<Uuid>,
    Json(payload): Json<ReviewPayload>,
) -> Result<Json<Review>, ErrorResponse> {
    payload.validate().map_err(|e| e.to_response())?;

    let existing = get_review_by_id(review_id, state.postgres.clone())
        .await
        .map_err(|e| e.to_response())?;
    require_owner(&claims, existing.user_id).map_err(|e| e.to_response())?;

    match update_review(review_id, payload, state.postgres.clone()).await {
        Ok(review) => Ok(Json(review)),
        Err(err) => {
            tracing::error!("Error updating review {}: {}", review_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn delete_review_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(review_id): Path<Uuid>,
) -> Result<StatusCode, ErrorResponse> {
    let existing = get_review_by_id(review_id, state.postgres.clone())
        .await
        .map_err(|e| e.to_response())?;
    require_owner(&claims, existing.user_id).map_err(|e| e.to_response())?;

    match delete_review(review_id, state.postgres.clone()).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            tracing::error!("Error deleting review {}: {}", review_id, err);
            Err(err.to_response())
        }
    }
}

pub async fn user_reviews_handler(
    State(state): State<AppState>,
    Query(query): Query<UserReviewQuery>,
) -> Result<Json<Vec<Review>>, ErrorResponse> {
    match list_reviews_by_username(query, state.postgres.clone()).await {
        Ok(reviews) => Ok(Json(reviews)),
        Err(err) => {
            tracing::error!("Error listing user reviews: {}", err);
            Err(err.to_response())
        }
    }
}
