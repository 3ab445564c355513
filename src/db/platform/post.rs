use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{Platform, platform::PlatformPayload},
};

pub async fn create_platform(
    payload: PlatformPayload,
    postgres: PgPool,
) -> Result<Platform, AppError> {
    let platform = sqlx::query_as::<_, Platform>(
        "INSERT INTO platforms (id, name, about, website)
			VALUES ($1, $2, $3, $4)
			RETURNING id, name, about, website, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(&payload.about)
    .bind(&payload.website)
    .fetch_one(&postgres)
    .await?;

    Ok(platform)
}
