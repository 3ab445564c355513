use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{Title, title::TitleQuery},
    pagination::{PageParams, Paginated},
};

const TITLE_COLUMNS: &str = "t.id, t.title, t.storyline, t.platform_id, p.name AS platform_name,
	char_length(t.title) AS len_title, t.active, t.avg_rating, t.number_ratings, t.created_at";

/// Paginated title listing. `search` matches the title or the platform name,
/// case-insensitive; ordering is restricted to the whitelisted clauses on
/// `TitleQuery`.
pub async fn list_titles(query: TitleQuery, postgres: PgPool) -> Result<Paginated<Title>, AppError> {
    let params = PageParams {
        page: query.page,
        page_size: query.page_size,
    };

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*)
			FROM titles t
			JOIN platforms p ON p.id = t.platform_id
			WHERE ($1::text IS NULL OR t.title ILIKE '%' || $1 || '%' OR p.name ILIKE '%' || $1 || '%')",
    )
    .bind(&query.search)
    .fetch_one(&postgres)
    .await?;

    // ORDER BY comes from a fixed whitelist, never from raw client input
    let sql = format!(
        "SELECT {TITLE_COLUMNS}
			FROM titles t
			JOIN platforms p ON p.id = t.platform_id
			WHERE ($1::text IS NULL OR t.title ILIKE '%' || $1 || '%' OR p.name ILIKE '%' || $1 || '%')
			ORDER BY {}
			LIMIT $2 OFFSET $3",
        query.order_clause()
    );

    let titles = sqlx::query_as::<_, Title>(&sql)
        .bind(&query.search)
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&postgres)
        .await?;

    Ok(Paginated::new(count, &params, titles))
}

pub async fn get_title_by_id(title_id: Uuid, postgres: PgPool) -> Result<Title, AppError> {
    let sql = format!(
        "SELECT {TITLE_COLUMNS}
			FROM titles t
			JOIN platforms p ON p.id = t.platform_id
			WHERE t.id = $1"
    );

    let title = sqlx::query_as::<_, Title>(&sql)
        .bind(title_id)
        .fetch_optional(&postgres)
        .await?;

    title.ok_or_else(|| AppError::NotFound("Title not found".into()))
}
