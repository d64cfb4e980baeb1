use crate::{
    sheets_proxy::domain::model::enums::sheets_proxy_domain_error::SheetsProxyDomainError,
    shared::infrastructure::google_sheets::spreadsheet_gateway::FIRST_DATA_ROW,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowNumber(u32);

impl RowNumber {
    pub fn new(value: u32) -> Result<Self, SheetsProxyDomainError> {
        if value < FIRST_DATA_ROW {
            return Err(SheetsProxyDomainError::InvalidRowNumber);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
