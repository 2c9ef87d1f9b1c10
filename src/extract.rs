//! Request-body extraction with envelope-shaped rejections.
//!
//! axum's default `Json` rejection answers a malformed or incomplete body with
//! a bare 422 and a plain-text message. Every response from this service uses
//! the `{status, message, data}` envelope, so handlers take this wrapper
//! instead: a body that fails to deserialize becomes a 400 `Validation` error
//! and goes through the same envelope mapping as every other failure. A body
//! that omits a field and a body that sends it empty are rejected alike.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
};

use crate::error::AuthError;

pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            // Well-formed JSON missing or mistyping a field
            Err(JsonRejection::JsonDataError(_)) => {
                Err(AuthError::Validation("Missing fields".to_string()))
            }
            // Syntax errors, wrong content type, unreadable body
            Err(_) => Err(AuthError::Validation("Invalid request body".to_string())),
        }
    }
}
