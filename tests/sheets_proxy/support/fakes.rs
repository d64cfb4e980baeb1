use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;
use sheets_auth_gateway::{
    iam::{
        domain::model::{
            entities::{authenticated_principal::AuthenticatedPrincipal, session_claims::SessionClaims},
            enums::iam_domain_error::IamDomainError,
        },
        interfaces::acl::session_authentication_facade::SessionAuthenticationFacade,
    },
    shared::{
        domain::model::{
            entities::caller_context::CallerContext,
            value_objects::third_party_access_token::ThirdPartyAccessToken,
        },
        infrastructure::google_sheets::spreadsheet_gateway::{
            SheetRow, SpreadsheetGateway, SpreadsheetGatewayError,
        },
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum GatewayCall {
    ReadHeader { tab: String },
    ReadRows { tab: String },
    Append { tab: String, values: Vec<Value> },
    Update { tab: String, row_number: u32, values: Vec<Value> },
    Delete { tab: String, row_number: u32 },
}

#[derive(Clone, Copy, Debug)]
pub enum FailureMode {
    Rejected(u16),
    TabNotFound,
    Unavailable,
}

#[derive(Default)]
struct FakeSpreadsheetState {
    header: Vec<Value>,
    rows: Vec<SheetRow>,
    next_row: Option<u32>,
    failure: Option<FailureMode>,
    calls: Vec<GatewayCall>,
    tokens: Vec<String>,
}

/// In-memory spreadsheet with a single tab shape; records every call.
pub struct FakeSpreadsheetGateway {
    state: Mutex<FakeSpreadsheetState>,
}

impl FakeSpreadsheetGateway {
    pub fn new(header: Vec<Value>, rows: Vec<Vec<Value>>) -> Self {
        let rows: Vec<SheetRow> = rows
            .into_iter()
            .zip(2u32..)
            .map(|(values, row_number)| SheetRow { row_number, values })
            .collect();
        let next_row = Some(rows.len() as u32 + 2);
        Self {
            state: Mutex::new(FakeSpreadsheetState {
                header,
                rows,
                next_row,
                ..FakeSpreadsheetState::default()
            }),
        }
    }

    pub fn fail_with(&self, failure: FailureMode) {
        self.state.lock().expect("mutex poisoned").failure = Some(failure);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.state.lock().expect("mutex poisoned").calls.clone()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").tokens.clone()
    }

    fn record(
        &self,
        access_token: &ThirdPartyAccessToken,
        call: GatewayCall,
    ) -> Result<(), SpreadsheetGatewayError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.tokens.push(access_token.expose().to_string());
        let tab = match &call {
            GatewayCall::ReadHeader { tab }
            | GatewayCall::ReadRows { tab }
            | GatewayCall::Append { tab, .. }
            | GatewayCall::Update { tab, .. }
            | GatewayCall::Delete { tab, .. } => tab.clone(),
        };
        state.calls.push(call);

        match state.failure {
            Some(FailureMode::Rejected(status)) => Err(SpreadsheetGatewayError::Rejected {
                status,
                message: format!("upstream said {status}"),
            }),
            Some(FailureMode::TabNotFound) => Err(SpreadsheetGatewayError::TabNotFound(tab)),
            Some(FailureMode::Unavailable) => Err(SpreadsheetGatewayError::Unavailable(
                "connection refused".to_string(),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SpreadsheetGateway for FakeSpreadsheetGateway {
    async fn read_header(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
    ) -> Result<Vec<Value>, SpreadsheetGatewayError> {
        self.record(
            access_token,
            GatewayCall::ReadHeader {
                tab: tab_name.to_string(),
            },
        )?;
        Ok(self.state.lock().expect("mutex poisoned").header.clone())
    }

    async fn read_rows(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
    ) -> Result<Vec<SheetRow>, SpreadsheetGatewayError> {
        self.record(
            access_token,
            GatewayCall::ReadRows {
                tab: tab_name.to_string(),
            },
        )?;
        Ok(self.state.lock().expect("mutex poisoned").rows.clone())
    }

    async fn append_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        values: &[Value],
    ) -> Result<Option<u32>, SpreadsheetGatewayError> {
        self.record(
            access_token,
            GatewayCall::Append {
                tab: tab_name.to_string(),
                values: values.to_vec(),
            },
        )?;
        Ok(self.state.lock().expect("mutex poisoned").next_row)
    }

    async fn update_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        row_number: u32,
        values: &[Value],
    ) -> Result<(), SpreadsheetGatewayError> {
        self.record(
            access_token,
            GatewayCall::Update {
                tab: tab_name.to_string(),
                row_number,
                values: values.to_vec(),
            },
        )
    }

    async fn delete_row(
        &self,
        access_token: &ThirdPartyAccessToken,
        tab_name: &str,
        row_number: u32,
    ) -> Result<(), SpreadsheetGatewayError> {
        self.record(
            access_token,
            GatewayCall::Delete {
                tab: tab_name.to_string(),
                row_number,
            },
        )
    }
}

pub struct FakeSessionAuthenticationFacade {
    callers: HashMap<String, CallerContext>,
}

impl FakeSessionAuthenticationFacade {
    pub fn new(callers: Vec<(&str, CallerContext)>) -> Self {
        Self {
            callers: callers
                .into_iter()
                .map(|(credential, caller)| (credential.to_string(), caller))
                .collect(),
        }
    }
}

#[async_trait]
impl SessionAuthenticationFacade for FakeSessionAuthenticationFacade {
    async fn authenticate(
        &self,
        session_credential: &str,
    ) -> Result<AuthenticatedPrincipal, IamDomainError> {
        let caller = self
            .callers
            .get(session_credential)
            .ok_or(IamDomainError::InvalidSessionCredential)?;
        let issued_at = Utc
            .with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
            .single()
            .expect("valid timestamp");

        Ok(AuthenticatedPrincipal {
            claims: SessionClaims {
                credential_id: "credential-under-test".to_string(),
                subject: caller.email.clone(),
                display_name: None,
                picture_url: None,
                role: caller.role,
                encrypted_access_token: "opaque-blob".to_string(),
                access_token_expires_at: issued_at + Duration::hours(1),
                issued_at,
                expires_at: issued_at + Duration::hours(8),
            },
            access_token: caller.access_token.clone(),
        })
    }
}
