use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    sheets_proxy::domain::{
        model::{
            entities::tab_contents::TabContents,
            enums::sheets_proxy_domain_error::SheetsProxyDomainError,
            queries::list_rows_query::ListRowsQuery,
        },
        services::sheets_proxy_query_service::SheetsProxyQueryService,
    },
    shared::infrastructure::google_sheets::spreadsheet_gateway::SpreadsheetGateway,
};

pub struct SheetsProxyQueryServiceImpl {
    gateway: Arc<dyn SpreadsheetGateway>,
    protected_tab: String,
}

impl SheetsProxyQueryServiceImpl {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, protected_tab: String) -> Self {
        Self {
            gateway,
            protected_tab,
        }
    }
}

#[async_trait]
impl SheetsProxyQueryService for SheetsProxyQueryServiceImpl {
    async fn handle_list_rows(
        &self,
        query: ListRowsQuery,
    ) -> Result<TabContents, SheetsProxyDomainError> {
        if query.tab().refers_to(&self.protected_tab) {
            return Err(SheetsProxyDomainError::ProtectedTab);
        }

        let access_token = &query.caller().access_token;
        let tab = query.tab().value();

        let header = self.gateway.read_header(access_token, tab).await?;
        let rows = self.gateway.read_rows(access_token, tab).await?;

        Ok(TabContents {
            tab: query.tab().clone(),
            header,
            rows,
        })
    }
}
