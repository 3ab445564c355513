use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{
        Review,
        review::{ReviewQuery, UserReviewQuery},
    },
};

const REVIEW_COLUMNS: &str = "r.id, r.user_id, u.username, r.title_id, r.rating,
	r.description, r.active, r.created_at, r.updated_at";

/// Reviews for one title, optionally narrowed by author, active flag or
/// rating. A title with no reviews (or an unknown id) yields an empty list.
pub async fn list_reviews_for_title(
    title_id: Uuid,
    query: ReviewQuery,
    postgres: PgPool,
) -> Result<Vec<Review>, AppError> {
    let sql = format!(
        "SELECT {REVIEW_COLUMNS}
			FROM reviews r
			JOIN users u ON u.id = r.user_id
			WHERE r.title_id = $1
				AND ($2::text IS NULL OR u.username = $2)
				AND ($3::bool IS NULL OR r.active = $3)
				AND ($4::int4 IS NULL OR r.rating = $4)
			ORDER BY r.created_at DESC"
    );

    let reviews = sqlx::query_as::<_, Review>(&sql)
        .bind(title_id)
        .bind(&query.username)
        .bind(query.active)
        .bind(query.rating)
        .fetch_all(&postgres)
        .await?;

    Ok(reviews)
}

/// All reviews, or only those written by `username` when the parameter is
/// present.
pub async fn list_reviews_by_username(
    query: UserReviewQuery,
    postgres: PgPool,
) -> Result<Vec<Review>, AppError> {
    let sql = format!(
        "SELECT {REVIEW_COLUMNS}
			FROM reviews r
			JOIN users u ON u.id = r.user_id
			WHERE ($1::text IS NULL OR u.username = $1)
			ORDER BY r.created_at DESC"
    );

    let reviews = sqlx::query_as::<_, Review>(&sql)
        .bind(&query.username)
        .fetch_all(&postgres)
        .await?;

    Ok(reviews)
}

pub async fn get_review_by_id(review_id: Uuid, postgres: PgPool) -> Result<Review, AppError> {
    let sql = format!(
        "SELECT {REVIEW_COLUMNS}
			FROM reviews r
			JOIN users u ON u.id = r.user_id
			WHERE r.id = $1"
    );

    let review = sqlx::query_as::<_, Review>(&sql)
        .bind(review_id)
        .fetch_optional(&postgres)
        .await?;

    review.ok_or_else(|| AppError::NotFound("Review not found".into()))
}
