use chrono::{DateTime, Duration, Utc};

use crate::shared::domain::model::{
    enums::user_role::UserRole, value_objects::identity_email::IdentityEmail,
};

/// Claim set carried by a session credential.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionClaims {
    pub credential_id: String,
    pub subject: IdentityEmail,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
    pub role: UserRole,
    pub encrypted_access_token: String,
    /// Advisory only; never enforced.
    pub access_token_expires_at: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn access_token_expires_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.access_token_expires_at <= now + window
    }
}
