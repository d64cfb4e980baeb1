use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AddRosterEntryRequestResource {
    #[validate(length(min = 3, max = 254))]
    pub email: String,
    /// `admin` or `user`.
    #[validate(length(min = 1))]
    pub role: String,
}
