use sqlx::PgPool;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_username(username: &str, postgres: PgPool) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password_hash, is_admin, created_at
			FROM users
			WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(&postgres)
    .await?;

    user.ok_or_else(|| AppError::NotFound("User not found".into()))
}
