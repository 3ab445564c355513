use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        account::{obtain_token_handler, refresh_token_handler, register_handler},
        platform::{
            create_platform_handler, delete_platform_handler, get_platform_handler,
            list_platforms_handler, update_platform_handler,
        },
        review::{
            create_review_handler, delete_review_handler, get_review_handler,
            list_title_reviews_handler, update_review_handler, user_reviews_handler,
        },
        title::{
            create_title_handler, delete_title_handler, get_title_handler, list_titles_handler,
            update_title_handler,
        },
    },
    middleware::{create_auth_rate_limiter, create_review_create_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();
    let review_create_rate_limiter = create_review_create_rate_limiter();

    let account_routes = Router::new()
        .route("/account/register/", post(register_handler))
        .route("/account/api/token/", post(obtain_token_handler))
        .route("/account/api/token/refresh/", post(refresh_token_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    let review_create_routes = Router::new()
        .route(
            "/watchlist/{id}/review-create/",
            post(create_review_handler),
        )
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(review_create_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .merge(account_routes)
        .merge(review_create_routes)
        .route(
            "/watchlist/list/",
            get(list_titles_handler).post(create_title_handler),
        )
        .route(
            "/watchlist/stream/",
            get(list_platforms_handler).post(create_platform_handler),
        )
        .route(
            "/watchlist/stream/{id}/",
            get(get_platform_handler)
                .put(update_platform_handler)
                .delete(delete_platform_handler),
        )
        .route("/watchlist/reviews/", get(user_reviews_handler))
        .route(
            "/watchlist/review/{id}/",
            get(get_review_handler)
                .put(update_review_handler)
                .delete(delete_review_handler),
        )
        .route("/watchlist/{id}/reviews/", get(list_title_reviews_handler))
        .route(
            "/watchlist/{id}/",
            get(get_title_handler)
                .put(update_title_handler)
                .delete(delete_title_handler),
        )
        .with_state(state)
}
