use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    sheets_proxy::domain::{
        model::{
            commands::{
                append_row_command::AppendRowCommand, delete_row_command::DeleteRowCommand,
                update_row_command::UpdateRowCommand,
            },
            enums::sheets_proxy_domain_error::SheetsProxyDomainError,
            value_objects::tab_name::TabName,
        },
        services::sheets_proxy_command_service::SheetsProxyCommandService,
    },
    shared::infrastructure::google_sheets::spreadsheet_gateway::SpreadsheetGateway,
};

pub struct SheetsProxyCommandServiceImpl {
    gateway: Arc<dyn SpreadsheetGateway>,
    protected_tab: String,
}

impl SheetsProxyCommandServiceImpl {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, protected_tab: String) -> Self {
        Self {
            gateway,
            protected_tab,
        }
    }

    fn ensure_accessible(&self, tab: &TabName) -> Result<(), SheetsProxyDomainError> {
        if tab.refers_to(&self.protected_tab) {
            return Err(SheetsProxyDomainError::ProtectedTab);
        }
        Ok(())
    }
}

#[async_trait]
impl SheetsProxyCommandService for SheetsProxyCommandServiceImpl {
    async fn handle_append(
        &self,
        command: AppendRowCommand,
    ) -> Result<Option<u32>, SheetsProxyDomainError> {
        self.ensure_accessible(command.tab())?;

        let row_number = self
            .gateway
            .append_row(
                &command.caller().access_token,
                command.tab().value(),
                command.values().values(),
            )
            .await?;

        tracing::info!(
            actor = %command.caller().email,
            tab = %command.tab().value(),
            row = ?row_number,
            "row appended"
        );

        Ok(row_number)
    }

    async fn handle_update(&self, command: UpdateRowCommand) -> Result<(), SheetsProxyDomainError> {
        self.ensure_accessible(command.tab())?;

        self.gateway
            .update_row(
                &command.caller().access_token,
                command.tab().value(),
                command.row_number().value(),
                command.values().values(),
            )
            .await?;

        tracing::info!(
            actor = %command.caller().email,
            tab = %command.tab().value(),
            row = command.row_number().value(),
            "row updated"
        );

        Ok(())
    }

    async fn handle_delete(&self, command: DeleteRowCommand) -> Result<(), SheetsProxyDomainError> {
        if !command.caller().is_admin() {
            return Err(SheetsProxyDomainError::AccessDenied);
        }
        self.ensure_accessible(command.tab())?;

        self.gateway
            .delete_row(
                &command.caller().access_token,
                command.tab().value(),
                command.row_number().value(),
            )
            .await?;

        tracing::info!(
            actor = %command.caller().email,
            tab = %command.tab().value(),
            row = command.row_number().value(),
            "row deleted"
        );

        Ok(())
    }
}
