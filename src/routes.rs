/// Route definitions
use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Build the API router. Protected routes take the [`crate::middleware::AuthUser`]
/// extractor inside their handlers, so nothing here needs a layer.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/signin", post(handlers::signin))
        .route("/auth/signout", post(handlers::signout))
        .route("/auth/profile", get(handlers::profile))
        .route("/auth/password", put(handlers::change_password))
        .route("/auth/forgot-password", post(handlers::forgot_password))
        .route("/auth/reset-password", post(handlers::reset_password))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
