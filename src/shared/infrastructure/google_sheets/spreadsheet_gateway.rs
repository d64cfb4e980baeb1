use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::shared::domain::model::value_objects::third_party_access_token::ThirdPartyAccessToken;

/// First data row; row 1 of every tab is the header.
pub const FIRST_DATA_ROW: u32 = 2;

/// Columns A..Z.
pub const MAX_COLUMNS: usize = 26;

#[derive(Clone, Debug, PartialEq)]
pub struct SheetRow {
    pub row_number: u32,
    pub values: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum SpreadsheetGatewayError {
    #[error("spreadsheet api rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("tab not found: {0}")]
    TabNotFound(String),

    #[error("spreadsheet api unavailable: {0}")]
    Unavailable(String),
}

impl SpreadsheetGatewayError {
    /// The caller's token was refused (expired, revoked, or no access to the sheet).
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, Self::Rejected { status, .. } if *status == 401 || *status == 403)
    }
}

/// Tab-addressed row operations against the configured spreadsheet. Every
/// call carries the bearer token it is performed with.
#[async_trait]
pub trait SpreadsheetGateway: Send + Sync {
    async fn read_header(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
    ) -> Result<Vec<Value>, SpreadsheetGatewayError>;

    async fn read_rows(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
    ) -> Result<Vec<SheetRow>, SpreadsheetGatewayError>;

    /// Returns the row number the API reports for the appended row, when it can be parsed.
    async fn append_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        values: &[Value],
    ) -> Result<Option<u32>, SpreadsheetGatewayError>;

    async fn update_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        row_number: u32,
        values: &[Value],
    ) -> Result<(), SpreadsheetGatewayError>;

    async fn delete_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        row_number: u32,
    ) -> Result<(), SpreadsheetGatewayError>;
}
