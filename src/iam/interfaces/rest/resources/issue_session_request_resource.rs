use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct IssueSessionRequestResource {
    /// Google OAuth access token obtained by the client.
    #[validate(length(min = 1))]
    pub access_token: String,
    /// Remaining lifetime of the Google token, as reported by Google.
    pub expires_in_seconds: Option<u64>,
}
