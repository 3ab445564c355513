use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{errors::AppError, models::Title};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: Uuid,
    pub name: String,
    pub about: String,
    pub website: String,
    pub created_at: DateTime<Utc>,
}

/// Platform detail response, with the titles hosted on it embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDetail {
    #[serde(flatten)]
    pub platform: Platform,
    pub watchlist: Vec<Title>,
}

#[derive(Debug, Deserialize)]
pub struct PlatformPayload {
    pub name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub website: String,
}

impl PlatformPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name", "Name must not be empty."));
        }
        Ok(())
    }
}
