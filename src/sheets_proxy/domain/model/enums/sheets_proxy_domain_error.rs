use thiserror::Error;

use crate::shared::infrastructure::google_sheets::spreadsheet_gateway::SpreadsheetGatewayError;

#[derive(Debug, Error)]
pub enum SheetsProxyDomainError {
    #[error("tab name is invalid")]
    InvalidTabName,

    #[error("row number must be 2 or greater")]
    InvalidRowNumber,

    #[error("row values are invalid: {0}")]
    InvalidRowValues(String),

    #[error("tab is not available through the proxy")]
    ProtectedTab,

    #[error("access denied")]
    AccessDenied,

    #[error("tab not found: {0}")]
    TabNotFound(String),

    #[error("spreadsheet api rejected the request ({status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl From<SpreadsheetGatewayError> for SheetsProxyDomainError {
    fn from(error: SpreadsheetGatewayError) -> Self {
        match error {
            SpreadsheetGatewayError::Rejected { status, message } => {
                Self::UpstreamRejected { status, message }
            }
            SpreadsheetGatewayError::TabNotFound(tab) => Self::TabNotFound(tab),
            SpreadsheetGatewayError::Unavailable(message) => Self::UpstreamUnavailable(message),
        }
    }
}
