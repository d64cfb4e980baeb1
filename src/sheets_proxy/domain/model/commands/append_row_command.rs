use serde_json::Value;

use crate::{
    sheets_proxy::domain::model::{
        enums::sheets_proxy_domain_error::SheetsProxyDomainError,
        value_objects::{row_values::RowValues, tab_name::TabName},
    },
    shared::domain::model::entities::caller_context::CallerContext,
};

#[derive(Clone, Debug)]
pub struct AppendRowCommand {
    caller: CallerContext,
    tab: TabName,
    values: RowValues,
}

impl AppendRowCommand {
    pub fn new(
        caller: CallerContext,
        tab: String,
        values: Vec<Value>,
    ) -> Result<Self, SheetsProxyDomainError> {
        Ok(Self {
            caller,
            tab: TabName::new(tab)?,
            values: RowValues::new(values)?,
        })
    }

    pub fn caller(&self) -> &CallerContext {
        &self.caller
    }
    pub fn tab(&self) -> &TabName {
        &self.tab
    }
    pub fn values(&self) -> &RowValues {
        &self.values
    }
}
