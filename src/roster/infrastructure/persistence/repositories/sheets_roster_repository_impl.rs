use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::{
    roster::{
        domain::model::{
            entities::{roster_entry::RosterEntry, roster_snapshot::RosterSnapshot},
            enums::{
                roster_domain_error::RosterDomainError, roster_entry_source::RosterEntrySource,
            },
        },
        infrastructure::persistence::repositories::roster_repository::RosterRepository,
    },
    shared::{
        domain::model::{
            enums::user_role::UserRole,
            value_objects::{
                identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken,
            },
        },
        infrastructure::google_sheets::spreadsheet_gateway::{
            SheetRow, SpreadsheetGateway, SpreadsheetGatewayError,
        },
    },
};

/// Roster stored in a sheet tab with columns `email | role | addedBy | addedAt`.
pub struct SheetsRosterRepositoryImpl {
    gateway: Arc<dyn SpreadsheetGateway>,
    tab_name: String,
}

impl SheetsRosterRepositoryImpl {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>, tab_name: String) -> Self {
        Self { gateway, tab_name }
    }

    fn parse_row(&self, row: &SheetRow) -> Option<RosterEntry> {
        let raw_email = cell_text(&row.values, 0)?;

        let Ok(email) = IdentityEmail::new(raw_email.to_string()) else {
            tracing::warn!(tab = %self.tab_name, row = row.row_number, "skipping roster row with invalid email");
            return None;
        };
        let role = match cell_text(&row.values, 1).map(str::parse::<UserRole>) {
            Some(Ok(role)) => role,
            _ => {
                tracing::warn!(tab = %self.tab_name, row = row.row_number, "skipping roster row with invalid role");
                return None;
            }
        };

        Some(RosterEntry {
            email,
            role,
            source: RosterEntrySource::Roster,
            row_number: Some(row.row_number),
            added_by: cell_text(&row.values, 2).map(str::to_string),
            added_at: cell_text(&row.values, 3)
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .map(|at| at.with_timezone(&Utc)),
        })
    }
}

#[async_trait]
impl RosterRepository for SheetsRosterRepositoryImpl {
    async fn load(
        &self,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<RosterSnapshot, RosterDomainError> {
        let rows = self
            .gateway
            .read_rows(access_token, &self.tab_name)
            .await
            .map_err(map_gateway_error)?;

        Ok(RosterSnapshot::new(
            rows.iter().filter_map(|row| self.parse_row(row)).collect(),
        ))
    }

    async fn append(
        &self,
        access_token: &ThirdPartyAccessToken,
        entry: &RosterEntry,
    ) -> Result<Option<u32>, RosterDomainError> {
        self.gateway
            .append_row(access_token, &self.tab_name, &to_row_values(entry))
            .await
            .map_err(map_gateway_error)
    }

    async fn update(
        &self,
        access_token: &ThirdPartyAccessToken,
        row_number: u32,
        entry: &RosterEntry,
    ) -> Result<(), RosterDomainError> {
        self.gateway
            .update_row(access_token, &self.tab_name, row_number, &to_row_values(entry))
            .await
            .map_err(map_gateway_error)
    }

    async fn delete(
        &self,
        access_token: &ThirdPartyAccessToken,
        row_number: u32,
    ) -> Result<(), RosterDomainError> {
        self.gateway
            .delete_row(access_token, &self.tab_name, row_number)
            .await
            .map_err(map_gateway_error)
    }
}

fn cell_text(values: &[Value], index: usize) -> Option<&str> {
    values
        .get(index)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn to_row_values(entry: &RosterEntry) -> Vec<Value> {
    vec![
        Value::String(entry.email.value().to_string()),
        Value::String(entry.role.as_str().to_string()),
        Value::String(entry.added_by.clone().unwrap_or_default()),
        Value::String(
            entry
                .added_at
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
        ),
    ]
}

fn map_gateway_error(error: SpreadsheetGatewayError) -> RosterDomainError {
    match error {
        SpreadsheetGatewayError::Rejected { status, message } => {
            RosterDomainError::UpstreamRejected { status, message }
        }
        SpreadsheetGatewayError::TabNotFound(tab) => {
            RosterDomainError::InfrastructureError(format!("roster tab '{tab}' does not exist"))
        }
        SpreadsheetGatewayError::Unavailable(message) => {
            RosterDomainError::UpstreamUnavailable(message)
        }
    }
}
