/// Revocation record for a signed-out bearer token
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A token revoked before its natural expiry. Keyed by the raw token string;
/// once `expires_at` passes the row is inert and eligible for the sweep.
#[derive(Debug, Clone, FromRow)]
pub struct RevokedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl RevokedToken {
    /// True once the underlying token would have expired anyway.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expired_when_past_natural_expiry() {
        let record = RevokedToken {
            token: "tok".to_string(),
            expires_at: Utc::now() - Duration::seconds(1),
        };
        assert!(record.is_expired());
    }

    #[test]
    fn not_expired_before_natural_expiry() {
        let record = RevokedToken {
            token: "tok".to_string(),
            expires_at: Utc::now() + Duration::days(7),
        };
        assert!(!record.is_expired());
    }
}
