use crate::error::{AuthError, Result};
use crate::models::User;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new account.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, created_at)
        VALUES (gen_random_uuid(), $1, $2, $3, CURRENT_TIMESTAMP)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailAlreadyExists,
        _ => AuthError::Database(e.to_string()),
    })?;

    Ok(user)
}

/// Look up an account by email.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Look up an account by id.
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Replace the stored password hash.
pub async fn update_password(pool: &PgPool, user_id: Uuid, password_hash: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE users SET password_hash = $1 WHERE id = $2
        "#,
    )
    .bind(password_hash)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Store a reset-token digest and its expiry on the account row,
/// replacing any previous pending reset.
pub async fn set_reset_token(
    pool: &PgPool,
    user_id: Uuid,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE users SET reset_token_hash = $1, reset_token_expires_at = $2 WHERE id = $3
        "#,
    )
    .bind(token_hash)
    .bind(expires_at)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Consume a reset token: store the new password hash and clear both reset
/// columns in one statement. The WHERE clause enforces both the digest match
/// and the expiry, so a stale or already-consumed token updates zero rows.
///
/// Returns true if a row was updated.
pub async fn reset_password_by_token(
    pool: &PgPool,
    token_hash: &str,
    new_password_hash: &str,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $2, reset_token_hash = NULL, reset_token_expires_at = NULL
        WHERE reset_token_hash = $1 AND reset_token_expires_at > NOW()
        "#,
    )
    .bind(token_hash)
    .bind(new_password_hash)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
