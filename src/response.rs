//! The `{status, message, data}` envelope used by every endpoint, success or
//! failure. Error responses produce the same shape via `AuthError::into_response`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

pub struct ApiResponse<T> {
    status: StatusCode,
    message: String,
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn created(message: &str, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: message.to_string(),
            data: Some(data),
        }
    }

    /// Success envelope with no payload, `data` serialized as null.
    pub fn message(message: &str) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": self.status.as_u16(),
            "message": self.message,
            "data": self.data,
        }));

        (self.status, body).into_response()
    }
}
