use serde_json::Value;

use crate::{
    sheets_proxy::domain::model::{
        enums::sheets_proxy_domain_error::SheetsProxyDomainError,
        value_objects::{row_number::RowNumber, row_values::RowValues, tab_name::TabName},
    },
    shared::domain::model::entities::caller_context::CallerContext,
};

#[derive(Clone, Debug)]
pub struct UpdateRowCommand {
    caller: CallerContext,
    tab: TabName,
    row_number: RowNumber,
    values: RowValues,
}

pub struct UpdateRowCommandParts {
    pub caller: CallerContext,
    pub tab: String,
    pub row_number: u32,
    pub values: Vec<Value>,
}

impl UpdateRowCommand {
    pub fn new(parts: UpdateRowCommandParts) -> Result<Self, SheetsProxyDomainError> {
        Ok(Self {
            caller: parts.caller,
            tab: TabName::new(parts.tab)?,
            row_number: RowNumber::new(parts.row_number)?,
            values: RowValues::new(parts.values)?,
        })
    }

    pub fn caller(&self) -> &CallerContext {
        &self.caller
    }
    pub fn tab(&self) -> &TabName {
        &self.tab
    }
    pub fn row_number(&self) -> RowNumber {
        self.row_number
    }
    pub fn values(&self) -> &RowValues {
        &self.values
    }
}
