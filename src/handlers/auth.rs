/// Authentication handlers
use axum::{extract::State, http::HeaderMap};
use chrono::{DateTime, Duration, Utc};

use crate::{
    db,
    error::{AuthError, Result},
    extract::Json,
    middleware::auth::{bearer_token, AuthUser},
    models::user::{
        ChangePasswordRequest, ForgotPasswordRequest, PasswordChangedResponse, PublicUser,
        ResetPasswordRequest, ResetTokenResponse, SigninRequest, SignupRequest, TokenResponse,
    },
    response::ApiResponse,
    security::{password, reset_token},
    AppState,
};

const MIN_PASSWORD_LENGTH: usize = 6;

/// Register a new account. Returns the public fields only, never the hash.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<ApiResponse<PublicUser>> {
    if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        return Err(AuthError::Validation("Missing fields".to_string()));
    }

    let password_hash = password::hash_password(&payload.password)?;
    let user = db::users::create_user(&state.db, &payload.name, &payload.email, &password_hash)
        .await?;

    tracing::info!(user_id = %user.id, "account created");

    Ok(ApiResponse::created("User created", PublicUser::from(user)))
}

/// Verify credentials and issue a 7-day bearer token. Unknown email and wrong
/// password produce the same generic error so accounts cannot be enumerated.
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<ApiResponse<TokenResponse>> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AuthError::Validation("Missing fields".to_string()));
    }

    let user = db::users::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    password::verify_password(&payload.password, &user.password_hash)?;

    let token = state
        .jwt
        .issue_token(user.id)
        .map_err(|_| AuthError::Internal("Failed to issue token".to_string()))?;

    Ok(ApiResponse::ok("Login successful", TokenResponse { token }))
}

/// Revoke the presented token. Always reports success: a missing or invalid
/// token means there is nothing to revoke, and a failed insert is logged but
/// not surfaced (revocation is best-effort bookkeeping).
pub async fn signout(State(state): State<AppState>, headers: HeaderMap) -> ApiResponse<()> {
    let Some(token) = bearer_token(&headers) else {
        return ApiResponse::message("Signed out");
    };

    let token_data = match state.jwt.validate_token(token) {
        Ok(data) => data,
        // Already invalid, nothing to revoke
        Err(_) => return ApiResponse::message("Signed out"),
    };

    let expires_at =
        DateTime::from_timestamp(token_data.claims.exp, 0).unwrap_or_else(Utc::now);

    if let Err(err) = db::revoked_tokens::revoke_token(&state.db, token, expires_at).await {
        tracing::error!(error = %err, "failed to record revoked token");
    }

    ApiResponse::message("Signed out")
}

/// Return the authenticated account's public fields.
pub async fn profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<ApiResponse<PublicUser>> {
    let user = db::users::find_by_id(&state.db, user.id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    Ok(ApiResponse::ok("Profile retrieved", PublicUser::from(user)))
}

/// Change the password of the authenticated account after re-verifying the
/// current one.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<ApiResponse<PasswordChangedResponse>> {
    if payload.current_password.is_empty() || payload.new_password.is_empty() {
        return Err(AuthError::Validation("Missing fields".to_string()));
    }

    let user = db::users::find_by_id(&state.db, auth.id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    password::verify_password(&payload.current_password, &user.password_hash)?;

    let new_hash = password::hash_password(&payload.new_password)?;
    db::users::update_password(&state.db, user.id, &new_hash).await?;

    tracing::info!(user_id = %user.id, "password changed");

    Ok(ApiResponse::ok(
        "Password updated",
        PasswordChangedResponse { id: user.id },
    ))
}

/// Start the reset flow: store a hashed single-use token with a 30-minute
/// expiry. An unknown email gets the same generic response so registration
/// cannot be probed.
///
/// Demo-only shortcut: the plaintext token is returned in the response body.
/// Production deployments must deliver it out-of-band (email) instead.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<ApiResponse<ResetTokenResponse>> {
    if payload.email.is_empty() {
        return Err(AuthError::Validation("Email is required".to_string()));
    }

    let Some(user) = db::users::find_by_email(&state.db, &payload.email).await? else {
        return Ok(ApiResponse::message("If email exists, reset link will be sent"));
    };

    let token = reset_token::generate_token();
    let token_hash = reset_token::hash_token(&token);
    let expires_at = Utc::now() + Duration::minutes(reset_token::RESET_TOKEN_TTL_MINUTES);

    db::users::set_reset_token(&state.db, user.id, &token_hash, expires_at).await?;

    Ok(ApiResponse::ok(
        "Reset token generated",
        ResetTokenResponse { reset_token: token },
    ))
}

/// Complete the reset flow: a matching, unexpired token digest swaps in the
/// new password hash and clears the reset fields in a single statement, so a
/// token can never be replayed.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<ApiResponse<()>> {
    if payload.token.is_empty() || payload.new_password.is_empty() {
        return Err(AuthError::Validation(
            "Token and new password required".to_string(),
        ));
    }

    if payload.new_password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let token_hash = reset_token::hash_token(&payload.token);
    let new_hash = password::hash_password(&payload.new_password)?;

    let updated = db::users::reset_password_by_token(&state.db, &token_hash, &new_hash).await?;
    if !updated {
        return Err(AuthError::InvalidOrExpiredResetToken);
    }

    Ok(ApiResponse::message("Password reset successful"))
}
