use async_trait::async_trait;

use crate::sheets_proxy::domain::model::{
    commands::{
        append_row_command::AppendRowCommand, delete_row_command::DeleteRowCommand,
        update_row_command::UpdateRowCommand,
    },
    enums::sheets_proxy_domain_error::SheetsProxyDomainError,
};

#[async_trait]
pub trait SheetsProxyCommandService: Send + Sync {
    /// Returns the appended row number when the spreadsheet reports one.
    async fn handle_append(
        &self,
        command: AppendRowCommand,
    ) -> Result<Option<u32>, SheetsProxyDomainError>;

    async fn handle_update(&self, command: UpdateRowCommand) -> Result<(), SheetsProxyDomainError>;

    async fn handle_delete(&self, command: DeleteRowCommand) -> Result<(), SheetsProxyDomainError>;
}
