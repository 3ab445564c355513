use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_review(review_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(review_id)
        .execute(&postgres)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Review not found".into()));
    }

    Ok(())
}
