use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RefreshSessionRequestResource {
    #[validate(length(min = 1))]
    pub access_token: String,
    pub expires_in_seconds: Option<u64>,
}
