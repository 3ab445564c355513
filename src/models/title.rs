use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub id: Uuid,
    pub title: String,
    pub storyline: String,
    pub platform_id: Uuid,
    pub platform_name: String,
    pub len_title: i32,
    pub active: bool,
    pub avg_rating: f64,
    pub number_ratings: i32,
    pub created_at: DateTime<Utc>,
}

impl Title {
    /// Running-average update applied when a review is created.
    ///
    /// This matches the behavior the product shipped with, which is not the
    /// exact incremental mean: after the first review the previous average is
    /// weighted as a single sample. Kept verbatim on purpose.
    pub fn fold_rating(avg_rating: f64, number_ratings: i32, rating: i32) -> (f64, i32) {
        let new_avg = if number_ratings == 0 {
            rating as f64
        } else {
            (avg_rating + rating as f64) / (number_ratings as f64 + 1.0)
        };
        (new_avg, number_ratings + 1)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePayload {
    pub title: String,
    pub storyline: String,
    pub platform_id: Uuid,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl TitlePayload {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = BTreeMap::new();

        if self.title.chars().count() < 4 {
            fields.insert(
                "title".into(),
                "The title must be at least 4 characters long.".into(),
            );
        } else if self.title == self.storyline {
            fields.insert(
                "title".into(),
                "The title and storyline cannot be the same.".into(),
            );
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(fields))
        }
    }
}

/// Query string for the title listing: free-text search over title and
/// platform name, ordering restricted to the rating column.
#[derive(Debug, Default, Deserialize)]
pub struct TitleQuery {
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl TitleQuery {
    pub fn order_clause(&self) -> &'static str {
        match self.ordering.as_deref() {
            Some("avg_rating") => "t.avg_rating ASC",
            Some("-avg_rating") => "t.avg_rating DESC",
            _ => "t.created_at DESC",
        }
    }
}
