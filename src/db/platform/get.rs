use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{Platform, Title, platform::PlatformDetail},
};

pub async fn list_platforms(postgres: PgPool) -> Result<Vec<Platform>, AppError> {
    let platforms = sqlx::query_as::<_, Platform>(
        "SELECT id, name, about, website, created_at
			FROM platforms
			ORDER BY created_at DESC",
    )
    .fetch_all(&postgres)
    .await?;

    Ok(platforms)
}

/// Platform detail with its titles embedded.
pub async fn get_platform_by_id(
    platform_id: Uuid,
    postgres: PgPool,
) -> Result<PlatformDetail, AppError> {
    let platform = sqlx::query_as::<_, Platform>(
        "SELECT id, name, about, website, created_at
			FROM platforms
			WHERE id = $1",
    )
    .bind(platform_id)
    .fetch_optional(&postgres)
    .await?
    .ok_or_else(|| AppError::NotFound("Platform not found".into()))?;

    let watchlist = sqlx::query_as::<_, Title>(
        "SELECT t.id, t.title, t.storyline, t.platform_id, p.name AS platform_name,
				char_length(t.title) AS len_title, t.active, t.avg_rating,
				t.number_ratings, t.created_at
			FROM titles t
			JOIN platforms p ON p.id = t.platform_id
			WHERE t.platform_id = $1
			ORDER BY t.created_at DESC",
    )
    .bind(platform_id)
    .fetch_all(&postgres)
    .await?;

    Ok(PlatformDetail {
        platform,
        watchlist,
    })
}
