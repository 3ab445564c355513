use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::hash_password,
    errors::AppError,
    models::{User, user::RegisterPayload},
};

/// Inserts a new user with a hashed password. Username/email uniqueness is
/// enforced by the store; violations come back as field-keyed validation
/// errors via the `sqlx::Error` conversion.
pub async fn create_user(payload: RegisterPayload, postgres: PgPool) -> Result<User, AppError> {
    let password_hash = hash_password(&payload.password)?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, username, email, password_hash)
			VALUES ($1, $2, $3, $4)
			RETURNING id, username, email, password_hash, is_admin, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&password_hash)
    .fetch_one(&postgres)
    .await?;

    Ok(user)
}
