use serde_json::Value;

use crate::{
    sheets_proxy::domain::model::enums::sheets_proxy_domain_error::SheetsProxyDomainError,
    shared::infrastructure::google_sheets::spreadsheet_gateway::MAX_COLUMNS,
};

/// Cell values for one row, starting at column A.
#[derive(Clone, Debug, PartialEq)]
pub struct RowValues(Vec<Value>);

impl RowValues {
    pub fn new(values: Vec<Value>) -> Result<Self, SheetsProxyDomainError> {
        if values.is_empty() {
            return Err(SheetsProxyDomainError::InvalidRowValues(
                "at least one value is required".to_string(),
            ));
        }
        if values.len() > MAX_COLUMNS {
            return Err(SheetsProxyDomainError::InvalidRowValues(format!(
                "at most {MAX_COLUMNS} values are allowed"
            )));
        }
        if let Some(index) = values
            .iter()
            .position(|value| value.is_array() || value.is_object())
        {
            return Err(SheetsProxyDomainError::InvalidRowValues(format!(
                "value at index {index} is not a scalar"
            )));
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }
}
