use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub title_id: Uuid,
    pub rating: i32,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewPayload {
    pub rating: i32,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ReviewPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::validation(
                "rating",
                "Rating must be between 1 and 5.",
            ));
        }
        Ok(())
    }
}

/// Filters accepted by the per-title review listing.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    pub username: Option<String>,
    pub active: Option<bool>,
    pub rating: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserReviewQuery {
    pub username: Option<String>,
}
