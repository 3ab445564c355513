use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::title::get_title_by_id,
    errors::AppError,
    models::{Title, title::TitlePayload},
};

pub async fn update_title(
    title_id: Uuid,
    payload: TitlePayload,
    postgres: PgPool,
) -> Result<Title, AppError> {
    let result = sqlx::query(
        "UPDATE titles
			SET title = $1, storyline = $2, platform_id = $3, active = $4
			WHERE id = $5",
    )
    .bind(&payload.title)
    .bind(&payload.storyline)
    .bind(payload.platform_id)
    .bind(payload.active)
    .bind(title_id)
    .execute(&postgres)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Title not found".into()));
    }

    get_title_by_id(title_id, postgres).await
}
