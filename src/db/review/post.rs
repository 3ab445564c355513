use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{Review, Title, review::ReviewPayload},
};

/// Creates a review and folds its rating into the title's running average,
/// all inside one transaction.
///
/// The title row is locked first so the aggregate update cannot interleave
/// with another review for the same title. A duplicate by the same user is
/// rejected before any mutation; the unique index on (user_id, title_id)
/// backstops the check under concurrent requests, and a violation surfaces
/// as the same `DuplicateReview` error.
pub async fn create_review(
    user_id: Uuid,
    username: String,
    title_id: Uuid,
    payload: ReviewPayload,
    postgres: PgPool,
) -> Result<Review, AppError> {
    let mut tx = postgres.begin().await?;

    let aggregate: Option<(f64, i32)> =
        sqlx::query_as("SELECT avg_rating, number_ratings FROM titles WHERE id = $1 FOR UPDATE")
            .bind(title_id)
            .fetch_optional(&mut *tx)
            .await?;

    let Some((avg_rating, number_ratings)) = aggregate else {
        return Err(AppError::NotFound("Title not found".into()));
    };

    let already_reviewed: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reviews WHERE user_id = $1 AND title_id = $2)")
            .bind(user_id)
            .bind(title_id)
            .fetch_one(&mut *tx)
            .await?;

    if already_reviewed {
        return Err(AppError::DuplicateReview);
    }

    let review_id = Uuid::new_v4();
    let (created_at, updated_at): (DateTime<Utc>, DateTime<Utc>) = sqlx::query_as(
        "INSERT INTO reviews (id, user_id, title_id, rating, description, active)
			VALUES ($1, $2, $3, $4, $5, $6)
			RETURNING created_at, updated_at",
    )
    .bind(review_id)
    .bind(user_id)
    .bind(title_id)
    .bind(payload.rating)
    .bind(&payload.description)
    .bind(payload.active)
    .fetch_one(&mut *tx)
    .await?;

    let (new_avg, new_count) = Title::fold_rating(avg_rating, number_ratings, payload.rating);

    sqlx::query("UPDATE titles SET avg_rating = $1, number_ratings = $2 WHERE id = $3")
        .bind(new_avg)
        .bind(new_count)
        .bind(title_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Review {
        id: review_id,
        user_id,
        username,
        title_id,
        rating: payload.rating,
        description: payload.description,
        active: payload.active,
        created_at,
        updated_at,
    })
}
