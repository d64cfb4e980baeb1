use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, put},
};
use validator::Validate;

use crate::{
    iam::{
        domain::model::enums::iam_domain_error::IamDomainError,
        interfaces::acl::session_authentication_facade::SessionAuthenticationFacade,
    },
    roster::{
        domain::{
            model::{
                commands::{
                    add_roster_entry_command::AddRosterEntryCommand,
                    change_roster_entry_role_command::ChangeRosterEntryRoleCommand,
                    remove_roster_entry_command::RemoveRosterEntryCommand,
                },
                enums::roster_domain_error::RosterDomainError,
                queries::list_roster_entries_query::ListRosterEntriesQuery,
            },
            services::{
                roster_command_service::RosterCommandService,
                roster_query_service::RosterQueryService,
            },
        },
        interfaces::rest::resources::{
            add_roster_entry_request_resource::AddRosterEntryRequestResource,
            change_roster_entry_role_request_resource::ChangeRosterEntryRoleRequestResource,
            roster_entry_resource::RosterEntryResource,
            roster_error_response_resource::RosterErrorResponseResource,
        },
    },
    shared::{
        domain::model::entities::caller_context::CallerContext,
        interfaces::rest::bearer_token::extract_bearer_token,
    },
};

#[derive(Clone)]
pub struct RosterRestControllerState {
    pub command_service: Arc<dyn RosterCommandService>,
    pub query_service: Arc<dyn RosterQueryService>,
    pub authentication_facade: Arc<dyn SessionAuthenticationFacade>,
}

pub fn router(state: RosterRestControllerState) -> Router {
    Router::new()
        .route("/roster/users", get(list_roster_entries).post(add_roster_entry))
        .route(
            "/roster/users/:email",
            put(change_roster_entry_role).delete(remove_roster_entry),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/roster/users",
    tag = "roster",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Bootstrap admins followed by roster rows", body = [RosterEntryResource]),
        (status = 401, description = "Missing or invalid session", body = RosterErrorResponseResource),
        (status = 403, description = "Caller is not an admin", body = RosterErrorResponseResource),
        (status = 503, description = "Spreadsheet unavailable", body = RosterErrorResponseResource)
    )
)]
pub async fn list_roster_entries(
    State(state): State<RosterRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RosterEntryResource>>, (StatusCode, Json<RosterErrorResponseResource>)> {
    let caller = authenticate_caller(&state, &headers).await?;

    let entries = state
        .query_service
        .handle_list(ListRosterEntriesQuery::new(caller))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(entries.into_iter().map(RosterEntryResource::from).collect()))
}

#[utoipa::path(
    post,
    path = "/roster/users",
    tag = "roster",
    request_body = AddRosterEntryRequestResource,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Roster entry added", body = RosterEntryResource),
        (status = 400, description = "Invalid email or role", body = RosterErrorResponseResource),
        (status = 401, description = "Missing or invalid session", body = RosterErrorResponseResource),
        (status = 403, description = "Caller is not an admin", body = RosterErrorResponseResource),
        (status = 409, description = "Entry exists or is a bootstrap admin", body = RosterErrorResponseResource),
        (status = 503, description = "Spreadsheet unavailable", body = RosterErrorResponseResource)
    )
)]
pub async fn add_roster_entry(
    State(state): State<RosterRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<AddRosterEntryRequestResource>,
) -> Result<(StatusCode, Json<RosterEntryResource>), (StatusCode, Json<RosterErrorResponseResource>)>
{
    let caller = authenticate_caller(&state, &headers).await?;

    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(RosterErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = AddRosterEntryCommand::new(caller, request.email, request.role)
        .map_err(map_domain_error)?;

    let entry = state
        .command_service
        .handle_add(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[utoipa::path(
    put,
    path = "/roster/users/{email}",
    tag = "roster",
    params(("email" = String, Path, description = "Roster entry email")),
    request_body = ChangeRosterEntryRoleRequestResource,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Role changed", body = RosterEntryResource),
        (status = 400, description = "Invalid email or role", body = RosterErrorResponseResource),
        (status = 401, description = "Missing or invalid session", body = RosterErrorResponseResource),
        (status = 403, description = "Caller is not an admin", body = RosterErrorResponseResource),
        (status = 404, description = "No such roster entry", body = RosterErrorResponseResource),
        (status = 409, description = "Target is a bootstrap admin", body = RosterErrorResponseResource)
    )
)]
pub async fn change_roster_entry_role(
    State(state): State<RosterRestControllerState>,
    Path(email): Path<String>,
    headers: HeaderMap,
    Json(request): Json<ChangeRosterEntryRoleRequestResource>,
) -> Result<Json<RosterEntryResource>, (StatusCode, Json<RosterErrorResponseResource>)> {
    let caller = authenticate_caller(&state, &headers).await?;

    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(RosterErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = ChangeRosterEntryRoleCommand::new(caller, email, request.role)
        .map_err(map_domain_error)?;

    let entry = state
        .command_service
        .handle_change_role(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(entry.into()))
}

#[utoipa::path(
    delete,
    path = "/roster/users/{email}",
    tag = "roster",
    params(("email" = String, Path, description = "Roster entry email")),
    security(("bearerAuth" = [])),
    responses(
        (status = 204, description = "Roster entry removed"),
        (status = 401, description = "Missing or invalid session", body = RosterErrorResponseResource),
        (status = 403, description = "Caller is not an admin", body = RosterErrorResponseResource),
        (status = 404, description = "No such roster entry", body = RosterErrorResponseResource),
        (status = 409, description = "Target is a bootstrap admin", body = RosterErrorResponseResource)
    )
)]
pub async fn remove_roster_entry(
    State(state): State<RosterRestControllerState>,
    Path(email): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<RosterErrorResponseResource>)> {
    let caller = authenticate_caller(&state, &headers).await?;

    let command = RemoveRosterEntryCommand::new(caller, email).map_err(map_domain_error)?;

    state
        .command_service
        .handle_remove(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

async fn authenticate_caller(
    state: &RosterRestControllerState,
    headers: &HeaderMap,
) -> Result<CallerContext, (StatusCode, Json<RosterErrorResponseResource>)> {
    let credential = extract_bearer_token(headers).map_err(|e| {
        (
            StatusCode::UNAUTHORIZED,
            Json(RosterErrorResponseResource {
                message: e.to_string(),
            }),
        )
    })?;

    let principal = state
        .authentication_facade
        .authenticate(&credential)
        .await
        .map_err(map_iam_error)?;

    Ok(principal.caller_context())
}

fn map_iam_error(error: IamDomainError) -> (StatusCode, Json<RosterErrorResponseResource>) {
    let status = match error {
        IamDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::UNAUTHORIZED,
    };

    (
        status,
        Json(RosterErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: RosterDomainError) -> (StatusCode, Json<RosterErrorResponseResource>) {
    let status = match &error {
        RosterDomainError::InvalidEmail | RosterDomainError::InvalidRole => StatusCode::BAD_REQUEST,
        RosterDomainError::AccessDenied => StatusCode::FORBIDDEN,
        RosterDomainError::EntryNotFound => StatusCode::NOT_FOUND,
        RosterDomainError::BootstrapAdminImmutable | RosterDomainError::EntryAlreadyExists => {
            StatusCode::CONFLICT
        }
        RosterDomainError::UpstreamRejected { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        RosterDomainError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        RosterDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(RosterErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
