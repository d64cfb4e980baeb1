use async_trait::async_trait;

use crate::sheets_proxy::domain::model::{
    entities::tab_contents::TabContents, enums::sheets_proxy_domain_error::SheetsProxyDomainError,
    queries::list_rows_query::ListRowsQuery,
};

#[async_trait]
pub trait SheetsProxyQueryService: Send + Sync {
    async fn handle_list_rows(
        &self,
        query: ListRowsQuery,
    ) -> Result<TabContents, SheetsProxyDomainError>;
}
