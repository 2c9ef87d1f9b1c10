// NotesKeep Auth Service Library

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod security;

#[cfg(test)]
mod tests;

pub use error::{AuthError, Result};

/// Shared application state, constructed once in `main` and injected into
/// handlers. No module-level singletons: the pool and JWT keys live here.
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub jwt: security::JwtKeys,
}
