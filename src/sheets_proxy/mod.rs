use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    iam::interfaces::acl::session_authentication_facade::SessionAuthenticationFacade,
    sheets_proxy::{
        application::{
            command_services::sheets_proxy_command_service_impl::SheetsProxyCommandServiceImpl,
            query_services::sheets_proxy_query_service_impl::SheetsProxyQueryServiceImpl,
        },
        interfaces::rest::controllers::sheets_proxy_rest_controller::{
            SheetsProxyRestControllerState, router,
        },
    },
    shared::infrastructure::google_sheets::spreadsheet_gateway::SpreadsheetGateway,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_sheets_proxy_router(
    config: &AppConfig,
    gateway: Arc<dyn SpreadsheetGateway>,
    authentication_facade: Arc<dyn SessionAuthenticationFacade>,
) -> Router {
    let command_service = Arc::new(SheetsProxyCommandServiceImpl::new(
        gateway.clone(),
        config.roster_tab_name.clone(),
    ));
    let query_service = Arc::new(SheetsProxyQueryServiceImpl::new(
        gateway,
        config.roster_tab_name.clone(),
    ));

    router(SheetsProxyRestControllerState {
        command_service,
        query_service,
        authentication_facade,
    })
}
