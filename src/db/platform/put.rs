use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{Platform, platform::PlatformPayload},
};

pub async fn update_platform(
    platform_id: Uuid,
    payload: PlatformPayload,
    postgres: PgPool,
) -> Result<Platform, AppError> {
    let platform = sqlx::query_as::<_, Platform>(
        "UPDATE platforms
			SET name = $1, about = $2, website = $3
			WHERE id = $4
			RETURNING id, name, about, website, created_at",
    )
    .bind(&payload.name)
    .bind(&payload.about)
    .bind(&payload.website)
    .bind(platform_id)
    .fetch_optional(&postgres)
    .await?;

    platform.ok_or_else(|| AppError::NotFound("Platform not found".into()))
}
