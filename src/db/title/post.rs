use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::title::get_title_by_id,
    errors::AppError,
    models::{Title, title::TitlePayload},
};

pub async fn create_title(payload: TitlePayload, postgres: PgPool) -> Result<Title, AppError> {
    let platform_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM platforms WHERE id = $1)")
        .bind(payload.platform_id)
        .fetch_one(&postgres)
        .await?;

    if !platform_exists {
        return Err(AppError::NotFound("Platform not found".into()));
    }

    let title_id: Uuid = sqlx::query_scalar(
        "INSERT INTO titles (id, title, storyline, platform_id, active)
			VALUES ($1, $2, $3, $4, $5)
			RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(&payload.title)
    .bind(&payload.storyline)
    .bind(payload.platform_id)
    .bind(payload.active)
    .fetch_one(&postgres)
    .await?;

    // Re-read through the join so the response carries the platform name
    get_title_by_id(title_id, postgres).await
}
