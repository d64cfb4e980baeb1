use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sheets_auth_gateway::{
    config::app_config::AppConfig,
    iam::{
        build_iam_context,
        interfaces::rest::resources::{
            iam_error_response_resource::IamErrorResponseResource,
            issue_session_request_resource::IssueSessionRequestResource,
            refresh_session_request_resource::RefreshSessionRequestResource,
            session_response_resource::{SessionProfileResource, SessionResponseResource},
        },
    },
    roster::{
        build_roster_router, build_roster_services,
        domain::model::enums::roster_entry_source::RosterEntrySource,
        interfaces::rest::resources::{
            add_roster_entry_request_resource::AddRosterEntryRequestResource,
            change_roster_entry_role_request_resource::ChangeRosterEntryRoleRequestResource,
            roster_entry_resource::RosterEntryResource,
            roster_error_response_resource::RosterErrorResponseResource,
        },
    },
    sheets_proxy::{
        build_sheets_proxy_router,
        interfaces::rest::resources::{
            append_row_response_resource::AppendRowResponseResource,
            row_values_request_resource::RowValuesRequestResource,
            sheets_proxy_error_response_resource::SheetsProxyErrorResponseResource,
            tab_contents_resource::{SheetRowResource, TabContentsResource},
        },
    },
    shared::{
        domain::{clock::SystemClock, model::enums::user_role::UserRole},
        infrastructure::google_sheets::google_sheets_gateway_impl::GoogleSheetsGatewayImpl,
        interfaces::rest::openapi::security::BearerSecurityAddon,
    },
};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        sheets_auth_gateway::iam::interfaces::rest::controllers::session_rest_controller::issue_session,
        sheets_auth_gateway::iam::interfaces::rest::controllers::session_rest_controller::refresh_session,
        sheets_auth_gateway::iam::interfaces::rest::controllers::session_rest_controller::describe_session,
        sheets_auth_gateway::roster::interfaces::rest::controllers::roster_rest_controller::list_roster_entries,
        sheets_auth_gateway::roster::interfaces::rest::controllers::roster_rest_controller::add_roster_entry,
        sheets_auth_gateway::roster::interfaces::rest::controllers::roster_rest_controller::change_roster_entry_role,
        sheets_auth_gateway::roster::interfaces::rest::controllers::roster_rest_controller::remove_roster_entry,
        sheets_auth_gateway::sheets_proxy::interfaces::rest::controllers::sheets_proxy_rest_controller::list_rows,
        sheets_auth_gateway::sheets_proxy::interfaces::rest::controllers::sheets_proxy_rest_controller::append_row,
        sheets_auth_gateway::sheets_proxy::interfaces::rest::controllers::sheets_proxy_rest_controller::update_row,
        sheets_auth_gateway::sheets_proxy::interfaces::rest::controllers::sheets_proxy_rest_controller::delete_row
    ),
    components(
        schemas(
            IssueSessionRequestResource,
            RefreshSessionRequestResource,
            SessionResponseResource,
            SessionProfileResource,
            IamErrorResponseResource,
            UserRole,
            RosterEntrySource,
            AddRosterEntryRequestResource,
            ChangeRosterEntryRoleRequestResource,
            RosterEntryResource,
            RosterErrorResponseResource,
            RowValuesRequestResource,
            AppendRowResponseResource,
            TabContentsResource,
            SheetRowResource,
            SheetsProxyErrorResponseResource
        )
    ),
    tags(
        (name = "iam", description = "Session issuance from Google OAuth tokens"),
        (name = "roster", description = "Admin-managed user roster"),
        (name = "sheets", description = "Row CRUD proxy over the configured spreadsheet")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let http = reqwest::Client::builder()
        .user_agent(concat!("sheets-auth-gateway/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build http client");
    let clock = Arc::new(SystemClock);
    let gateway = Arc::new(GoogleSheetsGatewayImpl::new(
        http.clone(),
        config.google_sheets_base_url.clone(),
        config.spreadsheet_id.clone(),
    ));

    let roster_services = build_roster_services(&config, gateway.clone(), clock.clone());
    let iam = build_iam_context(&config, http, roster_services.role_directory(), clock);
    let roster_router = build_roster_router(&roster_services, iam.authentication_facade.clone());
    let sheets_proxy_router =
        build_sheets_proxy_router(&config, gateway, iam.authentication_facade.clone());

    let app = Router::new()
        .merge(iam.router)
        .merge(roster_router)
        .merge(sheets_proxy_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(
        port = config.port,
        bootstrap_admins = config.bootstrap_admins.len(),
        roster_tab = %config.roster_tab_name,
        "server listening, swagger ui at /swagger-ui"
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
