/// Revocation-list operations
use crate::error::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Record a revoked token with the expiry it would have reached naturally.
/// Revoking the same token twice is a no-op.
pub async fn revoke_token(pool: &PgPool, token: &str, expires_at: DateTime<Utc>) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO revoked_tokens (token, expires_at)
        VALUES ($1, $2)
        ON CONFLICT (token) DO NOTHING
        "#,
    )
    .bind(token)
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Check whether a token has been revoked.
pub async fn is_token_revoked(pool: &PgPool, token: &str) -> Result<bool> {
    let revoked = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token = $1)
        "#,
    )
    .bind(token)
    .fetch_one(pool)
    .await?;

    Ok(revoked)
}

/// Delete revocation records whose token has passed its natural expiry
/// (maintenance operation, run by the background sweep).
pub async fn cleanup_expired(pool: &PgPool) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM revoked_tokens WHERE expires_at < NOW()
        "#,
    )
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
