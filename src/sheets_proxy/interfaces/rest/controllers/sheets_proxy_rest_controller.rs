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
    sheets_proxy::{
        domain::{
            model::{
                commands::{
                    append_row_command::AppendRowCommand,
                    delete_row_command::DeleteRowCommand,
                    update_row_command::{UpdateRowCommand, UpdateRowCommandParts},
                },
                enums::sheets_proxy_domain_error::SheetsProxyDomainError,
                queries::list_rows_query::ListRowsQuery,
            },
            services::{
                sheets_proxy_command_service::SheetsProxyCommandService,
                sheets_proxy_query_service::SheetsProxyQueryService,
            },
        },
        interfaces::rest::resources::{
            append_row_response_resource::AppendRowResponseResource,
            row_values_request_resource::RowValuesRequestResource,
            sheets_proxy_error_response_resource::SheetsProxyErrorResponseResource,
            tab_contents_resource::TabContentsResource,
        },
    },
    shared::{
        domain::model::entities::caller_context::CallerContext,
        interfaces::rest::bearer_token::extract_bearer_token,
    },
};

type ErrorResponse = (StatusCode, Json<SheetsProxyErrorResponseResource>);

#[derive(Clone)]
pub struct SheetsProxyRestControllerState {
    pub command_service: Arc<dyn SheetsProxyCommandService>,
    pub query_service: Arc<dyn SheetsProxyQueryService>,
    pub authentication_facade: Arc<dyn SessionAuthenticationFacade>,
}

pub fn router(state: SheetsProxyRestControllerState) -> Router {
    Router::new()
        .route("/sheets/:tab/rows", get(list_rows).post(append_row))
        .route(
            "/sheets/:tab/rows/:row_number",
            put(update_row).delete(delete_row),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/sheets/{tab}/rows",
    tag = "sheets",
    params(("tab" = String, Path, description = "Sheet tab title")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Header row and data rows", body = TabContentsResource),
        (status = 400, description = "Invalid tab name", body = SheetsProxyErrorResponseResource),
        (status = 401, description = "Missing or invalid session", body = SheetsProxyErrorResponseResource),
        (status = 403, description = "Protected tab", body = SheetsProxyErrorResponseResource),
        (status = 503, description = "Spreadsheet unavailable", body = SheetsProxyErrorResponseResource)
    )
)]
pub async fn list_rows(
    State(state): State<SheetsProxyRestControllerState>,
    Path(tab): Path<String>,
    headers: HeaderMap,
) -> Result<Json<TabContentsResource>, ErrorResponse> {
    let caller = authenticate_caller(&state, &headers).await?;

    let query = ListRowsQuery::new(caller, tab).map_err(map_domain_error)?;
    let contents = state
        .query_service
        .handle_list_rows(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(contents.into()))
}

#[utoipa::path(
    post,
    path = "/sheets/{tab}/rows",
    tag = "sheets",
    params(("tab" = String, Path, description = "Sheet tab title")),
    request_body = RowValuesRequestResource,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Row appended", body = AppendRowResponseResource),
        (status = 400, description = "Invalid tab name or values", body = SheetsProxyErrorResponseResource),
        (status = 401, description = "Missing or invalid session", body = SheetsProxyErrorResponseResource),
        (status = 403, description = "Protected tab", body = SheetsProxyErrorResponseResource),
        (status = 503, description = "Spreadsheet unavailable", body = SheetsProxyErrorResponseResource)
    )
)]
pub async fn append_row(
    State(state): State<SheetsProxyRestControllerState>,
    Path(tab): Path<String>,
    headers: HeaderMap,
    Json(request): Json<RowValuesRequestResource>,
) -> Result<(StatusCode, Json<AppendRowResponseResource>), ErrorResponse> {
    let caller = authenticate_caller(&state, &headers).await?;
    validate_request(&request)?;

    let command = AppendRowCommand::new(caller, tab, request.values).map_err(map_domain_error)?;
    let row_number = state
        .command_service
        .handle_append(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(AppendRowResponseResource { row_number }),
    ))
}

#[utoipa::path(
    put,
    path = "/sheets/{tab}/rows/{row_number}",
    tag = "sheets",
    params(
        ("tab" = String, Path, description = "Sheet tab title"),
        ("row_number" = u32, Path, description = "1-based sheet row, 2 or greater"),
    ),
    request_body = RowValuesRequestResource,
    security(("bearerAuth" = [])),
    responses(
        (status = 204, description = "Row updated"),
        (status = 400, description = "Invalid tab, row or values", body = SheetsProxyErrorResponseResource),
        (status = 401, description = "Missing or invalid session", body = SheetsProxyErrorResponseResource),
        (status = 403, description = "Protected tab", body = SheetsProxyErrorResponseResource),
        (status = 503, description = "Spreadsheet unavailable", body = SheetsProxyErrorResponseResource)
    )
)]
pub async fn update_row(
    State(state): State<SheetsProxyRestControllerState>,
    Path((tab, row_number)): Path<(String, u32)>,
    headers: HeaderMap,
    Json(request): Json<RowValuesRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    let caller = authenticate_caller(&state, &headers).await?;
    validate_request(&request)?;

    let command = UpdateRowCommand::new(UpdateRowCommandParts {
        caller,
        tab,
        row_number,
        values: request.values,
    })
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/sheets/{tab}/rows/{row_number}",
    tag = "sheets",
    params(
        ("tab" = String, Path, description = "Sheet tab title"),
        ("row_number" = u32, Path, description = "1-based sheet row, 2 or greater"),
    ),
    security(("bearerAuth" = [])),
    responses(
        (status = 204, description = "Row deleted"),
        (status = 400, description = "Invalid tab or row", body = SheetsProxyErrorResponseResource),
        (status = 401, description = "Missing or invalid session", body = SheetsProxyErrorResponseResource),
        (status = 403, description = "Caller is not an admin or tab is protected", body = SheetsProxyErrorResponseResource),
        (status = 404, description = "Tab not found", body = SheetsProxyErrorResponseResource),
        (status = 503, description = "Spreadsheet unavailable", body = SheetsProxyErrorResponseResource)
    )
)]
pub async fn delete_row(
    State(state): State<SheetsProxyRestControllerState>,
    Path((tab, row_number)): Path<(String, u32)>,
    headers: HeaderMap,
) -> Result<StatusCode, ErrorResponse> {
    let caller = authenticate_caller(&state, &headers).await?;

    let command = DeleteRowCommand::new(caller, tab, row_number).map_err(map_domain_error)?;
    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn validate_request(request: &RowValuesRequestResource) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(SheetsProxyErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )
    })
}

async fn authenticate_caller(
    state: &SheetsProxyRestControllerState,
    headers: &HeaderMap,
) -> Result<CallerContext, ErrorResponse> {
    let credential = extract_bearer_token(headers).map_err(|e| {
        (
            StatusCode::UNAUTHORIZED,
            Json(SheetsProxyErrorResponseResource {
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

fn map_iam_error(error: IamDomainError) -> ErrorResponse {
    let status = match error {
        IamDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::UNAUTHORIZED,
    };

    (
        status,
        Json(SheetsProxyErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: SheetsProxyDomainError) -> ErrorResponse {
    let status = match &error {
        SheetsProxyDomainError::InvalidTabName
        | SheetsProxyDomainError::InvalidRowNumber
        | SheetsProxyDomainError::InvalidRowValues(_) => StatusCode::BAD_REQUEST,
        SheetsProxyDomainError::ProtectedTab | SheetsProxyDomainError::AccessDenied => {
            StatusCode::FORBIDDEN
        }
        SheetsProxyDomainError::TabNotFound(_) => StatusCode::NOT_FOUND,
        SheetsProxyDomainError::UpstreamRejected { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        SheetsProxyDomainError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(SheetsProxyErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
