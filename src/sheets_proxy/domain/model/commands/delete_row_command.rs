use crate::{
    sheets_proxy::domain::model::{
        enums::sheets_proxy_domain_error::SheetsProxyDomainError,
        value_objects::{row_number::RowNumber, tab_name::TabName},
    },
    shared::domain::model::entities::caller_context::CallerContext,
};

#[derive(Clone, Debug)]
pub struct DeleteRowCommand {
    caller: CallerContext,
    tab: TabName,
    row_number: RowNumber,
}

impl DeleteRowCommand {
    pub fn new(
        caller: CallerContext,
        tab: String,
        row_number: u32,
    ) -> Result<Self, SheetsProxyDomainError> {
        Ok(Self {
            caller,
            tab: TabName::new(tab)?,
            row_number: RowNumber::new(row_number)?,
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
}
