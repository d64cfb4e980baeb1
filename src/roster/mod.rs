use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    iam::interfaces::acl::{
        role_directory_facade::RoleDirectoryFacade,
        session_authentication_facade::SessionAuthenticationFacade,
    },
    roster::{
        application::{
            acl::role_directory_facade_impl::RoleDirectoryFacadeImpl,
            command_services::roster_command_service_impl::RosterCommandServiceImpl,
            query_services::roster_query_service_impl::RosterQueryServiceImpl,
        },
        domain::{
            model::value_objects::bootstrap_admins::BootstrapAdmins,
            services::{
                roster_command_service::RosterCommandService,
                roster_query_service::RosterQueryService,
            },
        },
        infrastructure::persistence::repositories::sheets_roster_repository_impl::SheetsRosterRepositoryImpl,
        interfaces::rest::controllers::roster_rest_controller::{RosterRestControllerState, router},
    },
    shared::{
        domain::clock::Clock, infrastructure::google_sheets::spreadsheet_gateway::SpreadsheetGateway,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Roster services, built before the session issuer since it resolves roles through them.
#[derive(Clone)]
pub struct RosterServices {
    pub command_service: Arc<dyn RosterCommandService>,
    pub query_service: Arc<dyn RosterQueryService>,
}

impl RosterServices {
    pub fn role_directory(&self) -> Arc<dyn RoleDirectoryFacade> {
        Arc::new(RoleDirectoryFacadeImpl::new(self.query_service.clone()))
    }
}

pub fn build_roster_services(
    config: &AppConfig,
    gateway: Arc<dyn SpreadsheetGateway>,
    clock: Arc<dyn Clock>,
) -> RosterServices {
    let bootstrap_admins = BootstrapAdmins::new(config.bootstrap_admins.clone());
    let repository = Arc::new(SheetsRosterRepositoryImpl::new(
        gateway,
        config.roster_tab_name.clone(),
    ));

    let query_service: Arc<dyn RosterQueryService> = Arc::new(RosterQueryServiceImpl::new(
        repository.clone(),
        bootstrap_admins.clone(),
        config.roster_cache_ttl,
    ));
    let command_service = Arc::new(RosterCommandServiceImpl::new(
        repository,
        query_service.clone(),
        bootstrap_admins,
        clock,
    ));

    RosterServices {
        command_service,
        query_service,
    }
}

pub fn build_roster_router(
    services: &RosterServices,
    authentication_facade: Arc<dyn SessionAuthenticationFacade>,
) -> Router {
    router(RosterRestControllerState {
        command_service: services.command_service.clone(),
        query_service: services.query_service.clone(),
        authentication_facade,
    })
}
