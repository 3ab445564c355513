use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;
use watchlist_be::{
    auth::{
        AuthClaims, TOKEN_USE_ACCESS, TOKEN_USE_REFRESH, decode_token, generate_token_pair,
        refresh_access_token,
    },
    errors::AppError,
    models::{User, user::Claims},
    permissions::{claims_user_id, require_admin, require_owner},
};

const TEST_SECRET: &str = "test-secret-do-not-use";

static INIT: std::sync::Once = std::sync::Once::new();

fn setup_env() {
    // SAFETY: guarded by Once, so no test reads the env mid-write
    INIT.call_once(|| unsafe { std::env::set_var("JWT_SECRET", TEST_SECRET) });
}

fn test_user(admin: bool) -> User {
    User {
        id: Uuid::new_v4(),
        username: "alice".into(),
        email: "alice@example.com".into(),
        password_hash: String::new(),
        is_admin: admin,
        created_at: Utc::now(),
    }
}

fn claims(sub: Uuid, admin: bool) -> Claims {
    Claims {
        sub: sub.to_string(),
        username: "alice".into(),
        admin,
        token_use: TOKEN_USE_ACCESS.into(),
        exp: (Utc::now().timestamp() + 3600) as usize,
    }
}

#[test]
fn test_token_pair_decodes_to_user_identity() {
    setup_env();
    let user = test_user(false);
    let pair = generate_token_pair(&user).unwrap();

    let access = decode_token(&pair.access).unwrap();
    assert_eq!(access.sub, user.id.to_string());
    assert_eq!(access.username, "alice");
    assert!(!access.admin);
    assert_eq!(access.token_use, TOKEN_USE_ACCESS);

    let refresh = decode_token(&pair.refresh).unwrap();
    assert_eq!(refresh.sub, user.id.to_string());
    assert_eq!(refresh.token_use, TOKEN_USE_REFRESH);
    // Refresh outlives access
    assert!(refresh.exp > access.exp);
}

#[test]
fn test_refresh_returns_new_access_token() {
    setup_env();
    let user = test_user(true);
    let pair = generate_token_pair(&user).unwrap();

    let access = refresh_access_token(&pair.refresh).unwrap();
    let claims = decode_token(&access).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert!(claims.admin);
    assert_eq!(claims.token_use, TOKEN_USE_ACCESS);
}

#[test]
fn test_refresh_rejects_access_token() {
    setup_env();
    let user = test_user(false);
    let pair = generate_token_pair(&user).unwrap();

    let err = refresh_access_token(&pair.access).unwrap_err();
    assert!(matches!(err, AppError::InvalidToken(_)));
}

#[test]
fn test_expired_token_is_rejected() {
    setup_env();
    let expired = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "bob".into(),
        admin: false,
        token_use: TOKEN_USE_ACCESS.into(),
        // well outside the default leeway
        exp: (Utc::now().timestamp() - 600) as usize,
    };
    let token = encode(
        &Header::default(),
        &expired,
        &EncodingKey::from_secret(TEST_SECRET.as_ref()),
    )
    .unwrap();

    assert!(decode_token(&token).is_err());
}

#[test]
fn test_extractor_rejects_refresh_token_and_garbage() {
    setup_env();
    let user = test_user(false);
    let pair = generate_token_pair(&user).unwrap();

    assert!(AuthClaims::from_token(&pair.access).is_ok());
    assert!(AuthClaims::from_token(&pair.refresh).is_err());
    assert!(AuthClaims::from_token("not-a-token").is_err());
}

#[test]
fn test_require_admin() {
    let id = Uuid::new_v4();
    assert!(require_admin(&claims(id, true)).is_ok());

    let err = require_admin(&claims(id, false)).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn test_require_owner() {
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    assert!(require_owner(&claims(owner, false), owner).is_ok());

    let err = require_owner(&claims(stranger, false), owner).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[test]
fn test_claims_user_id_parses_subject() {
    let id = Uuid::new_v4();
    assert_eq!(claims_user_id(&claims(id, false)).unwrap(), id);

    let mut bad = claims(id, false);
    bad.sub = "not-a-uuid".into();
    assert!(claims_user_id(&bad).is_err());
}
