use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::domain::model::enums::user_role::UserRole;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SessionProfileResource {
    pub subject: String,
    pub display_name: Option<String>,
    pub picture_url: Option<String>,
    pub role: UserRole,
    pub access_token_expires_at: DateTime<Utc>,
    pub access_token_expires_soon: bool,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SessionResponseResource {
    pub session_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub profile: SessionProfileResource,
}
