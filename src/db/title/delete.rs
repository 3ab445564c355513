use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Deleting a title cascades to its reviews.
pub async fn delete_title(title_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM titles WHERE id = $1")
        .bind(title_id)
        .execute(&postgres)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Title not found".into()));
    }

    Ok(())
}
