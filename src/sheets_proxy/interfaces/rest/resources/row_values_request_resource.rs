use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RowValuesRequestResource {
    /// Cell values from column A onwards: strings, numbers, booleans or null.
    #[validate(length(min = 1, max = 26))]
    pub values: Vec<Value>,
}
