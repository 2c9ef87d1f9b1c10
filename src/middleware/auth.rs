//! Authentication guard for protected routes.
//!
//! Implemented as an extractor so a handler cannot accidentally skip the check:
//! taking [`AuthUser`] as an argument *is* the guard. Token resolution tries the
//! `Authorization: Bearer` header first, then a `?token=` query parameter —
//! the fallback exists for embedded-resource requests (inline images) that
//! cannot set custom headers.
//!
//! If the revocation lookup itself fails the guard fails closed: the request is
//! rejected with a server error instead of being admitted unverified.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, Uri},
};
use uuid::Uuid;

use crate::db;
use crate::error::AuthError;
use crate::AppState;

/// The authenticated account id, resolved from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extract a `?token=` value with the framework's query semantics
/// (percent-decoding included).
fn query_token(uri: &Uri) -> Option<String> {
    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(uri).ok()?;
    params
        .get("token")
        .filter(|token| !token.is_empty())
        .cloned()
}

/// Resolve the bearer token for a request: header first, query fallback.
pub fn resolve_token(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    bearer_token(headers)
        .map(str::to_string)
        .or_else(|| query_token(uri))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            resolve_token(&parts.headers, &parts.uri).ok_or(AuthError::MissingToken)?;

        let token_data = state.jwt.validate_token(&token)?;

        // Fail-closed contract: a store error here becomes a 500, never a pass.
        if db::revoked_tokens::is_token_revoked(&state.db, &token).await? {
            return Err(AuthError::TokenRevoked);
        }

        let user_id =
            Uuid::parse_str(&token_data.claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser { id: user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn uri(path_and_query: &str) -> Uri {
        path_and_query.parse().unwrap()
    }

    #[test]
    fn test_bearer_header_resolves() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(
            resolve_token(&headers, &uri("/auth/profile")).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_header_wins_over_query() {
        let headers = headers_with_auth("Bearer from-header");
        assert_eq!(
            resolve_token(&headers, &uri("/auth/profile?token=from-query")).as_deref(),
            Some("from-header")
        );
    }

    #[test]
    fn test_query_fallback() {
        let headers = HeaderMap::new();
        assert_eq!(
            resolve_token(&headers, &uri("/files/1?inline=1&token=from-query")).as_deref(),
            Some("from-query")
        );
    }

    #[test]
    fn test_query_token_is_percent_decoded() {
        let headers = HeaderMap::new();
        assert_eq!(
            resolve_token(&headers, &uri("/files/1?token=abc%2Edef")).as_deref(),
            Some("abc.def")
        );
    }

    #[test]
    fn test_malformed_header_falls_back_to_query() {
        let headers = headers_with_auth("Token abc");
        assert_eq!(
            resolve_token(&headers, &uri("/x?token=tok")).as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_neither_source_present() {
        let headers = HeaderMap::new();
        assert_eq!(resolve_token(&headers, &uri("/auth/profile")), None);
        assert_eq!(resolve_token(&headers, &uri("/auth/profile?page=2")), None);
    }

    #[test]
    fn test_empty_query_token_ignored() {
        let headers = HeaderMap::new();
        assert_eq!(resolve_token(&headers, &uri("/x?token=")), None);
    }
}
