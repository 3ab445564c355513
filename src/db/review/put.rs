use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::review::get_review_by_id,
    errors::AppError,
    models::{Review, review::ReviewPayload},
};

/// Updates a review in place. The title aggregate is left untouched: only
/// review creation feeds the running average.
pub async fn update_review(
    review_id: Uuid,
    payload: ReviewPayload,
    postgres: PgPool,
) -> Result<Review, AppError> {
    let result = sqlx::query(
        "UPDATE reviews
			SET rating = $1, description = $2, active = $3, updated_at = now()
			WHERE id = $4",
    )
    .bind(payload.rating)
    .bind(&payload.description)
    .bind(payload.active)
    .bind(review_id)
    .execute(&postgres)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Review not found".into()));
    }

    get_review_by_id(review_id, postgres).await
}
