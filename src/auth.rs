use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::TypedHeader;
use chrono::{Duration, Utc};
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    errors::AppError,
    models::{
        User,
        user::{Claims, TokenPair},
    },
};

pub const TOKEN_USE_ACCESS: &str = "access";
pub const TOKEN_USE_REFRESH: &str = "refresh";

pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, _state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or invalid Authorization header".into(),
                    )
                })?;

        AuthClaims::from_token(bearer.token())
    }
}

impl AuthClaims {
    pub fn from_token(token: &str) -> Result<Self, (StatusCode, String)> {
        let claims = decode_token(token)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid or expired token".into()))?;

        // Refresh tokens are only good for the refresh endpoint
        if claims.token_use != TOKEN_USE_ACCESS {
            return Err((StatusCode::UNAUTHORIZED, "Not an access token".into()));
        }

        Ok(Self(claims))
    }
}

pub fn decode_token(token: &str) -> Result<Claims, AppError> {
    let secret = std::env::var("JWT_SECRET").map_err(|e| AppError::EnvError(e.to_string()))?;
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| AppError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

fn generate_token(claims: &Claims) -> Result<String, AppError> {
    let secret = std::env::var("JWT_SECRET").map_err(|e| AppError::EnvError(e.to_string()))?;
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(AppError::JwtError)
}

fn claims_for(user: &User, token_use: &str, ttl: Duration) -> Claims {
    Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        admin: user.is_admin,
        token_use: token_use.to_string(),
        exp: (Utc::now() + ttl).timestamp() as usize,
    }
}

/// Short-lived access token plus longer-lived refresh token.
pub fn generate_token_pair(user: &User) -> Result<TokenPair, AppError> {
    let access = generate_token(&claims_for(user, TOKEN_USE_ACCESS, Duration::hours(1)))?;
    let refresh = generate_token(&claims_for(user, TOKEN_USE_REFRESH, Duration::days(7)))?;
    Ok(TokenPair { access, refresh })
}

/// Trade a valid refresh token for a fresh access token. The new token is
/// minted from the refresh claims, no database round trip.
pub fn refresh_access_token(refresh_token: &str) -> Result<String, AppError> {
    let claims = decode_token(refresh_token)?;

    if claims.token_use != TOKEN_USE_REFRESH {
        return Err(AppError::InvalidToken("Not a refresh token".into()));
    }

    generate_token(&Claims {
        sub: claims.sub,
        username: claims.username,
        admin: claims.admin,
        token_use: TOKEN_USE_ACCESS.to_string(),
        exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    })
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

pub fn verify_password(expected_hash: &str, candidate: &str) -> bool {
    match PasswordHash::new(expected_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
