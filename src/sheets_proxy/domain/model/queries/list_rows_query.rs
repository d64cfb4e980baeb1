use crate::{
    sheets_proxy::domain::model::{
        enums::sheets_proxy_domain_error::SheetsProxyDomainError, value_objects::tab_name::TabName,
    },
    shared::domain::model::entities::caller_context::CallerContext,
};

#[derive(Clone, Debug)]
pub struct ListRowsQuery {
    caller: CallerContext,
    tab: TabName,
}

impl ListRowsQuery {
    pub fn new(caller: CallerContext, tab: String) -> Result<Self, SheetsProxyDomainError> {
        Ok(Self {
            caller,
            tab: TabName::new(tab)?,
        })
    }

    pub fn caller(&self) -> &CallerContext {
        &self.caller
    }
    pub fn tab(&self) -> &TabName {
        &self.tab
    }
}
