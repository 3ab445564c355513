use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

/// Deleting a platform cascades to its titles and their reviews.
pub async fn delete_platform(platform_id: Uuid, postgres: PgPool) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM platforms WHERE id = $1")
        .bind(platform_id)
        .execute(&postgres)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Platform not found".into()));
    }

    Ok(())
}
