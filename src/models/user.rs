use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,       // user ID
    pub username: String,  // login name
    pub admin: bool,       // staff flag
    pub token_use: String, // "access" or "refresh"
    pub exp: usize,        // expiration time
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = BTreeMap::new();

        if self.username.len() < 3 {
            fields.insert(
                "username".into(),
                "Username must be at least 3 characters long.".into(),
            );
        } else if !self
            .username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            fields.insert(
                "username".into(),
                "Username may only contain letters, digits and underscores.".into(),
            );
        }

        if !is_valid_email(&self.email) {
            fields.insert("email".into(), "Enter a valid email address.".into());
        }

        if self.password != self.password2 {
            fields.insert("password".into(), "Passwords do not match.".into());
        } else if self.password.is_empty() {
            fields.insert("password".into(), "Password must not be empty.".into());
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(fields))
        }
    }
}

// local@domain.tld, no spaces, exactly one '@', a dot in the domain
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || email.contains(' ') || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshPayload {
    pub refresh: String,
}
