//! Authorization predicates, called by handlers before touching the store.
//! Read endpoints skip them entirely; an authenticated requester who fails a
//! predicate gets a 403.

use uuid::Uuid;

use crate::{errors::AppError, models::user::Claims};

pub fn claims_user_id(claims: &Claims) -> Result<Uuid, AppError> {
    Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::InvalidToken("Malformed subject claim".into()))
}

pub fn require_admin(claims: &Claims) -> Result<(), AppError> {
    if claims.admin {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only administrators may perform this action".into(),
        ))
    }
}

pub fn require_owner(claims: &Claims, owner_id: Uuid) -> Result<(), AppError> {
    if claims_user_id(claims)? == owner_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Only the review author may perform this action".into(),
        ))
    }
}
