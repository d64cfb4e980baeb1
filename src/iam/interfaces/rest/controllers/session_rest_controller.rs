use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use chrono::Duration;
use validator::Validate;

use crate::{
    iam::{
        domain::{
            model::{
                commands::{
                    issue_session_command::IssueSessionCommand,
                    refresh_session_command::RefreshSessionCommand,
                },
                entities::{issued_session::IssuedSession, session_claims::SessionClaims},
                enums::iam_domain_error::IamDomainError,
                queries::authenticate_session_query::AuthenticateSessionQuery,
            },
            services::{
                session_command_service::SessionCommandService,
                session_query_service::SessionQueryService,
            },
        },
        interfaces::rest::resources::{
            iam_error_response_resource::IamErrorResponseResource,
            issue_session_request_resource::IssueSessionRequestResource,
            refresh_session_request_resource::RefreshSessionRequestResource,
            session_response_resource::{SessionProfileResource, SessionResponseResource},
        },
    },
    shared::{domain::clock::Clock, interfaces::rest::bearer_token::extract_bearer_token},
};

const TOKEN_TYPE: &str = "Bearer";
const ACCESS_TOKEN_EXPIRY_HINT_MINUTES: i64 = 5;

#[derive(Clone)]
pub struct SessionRestControllerState {
    pub command_service: Arc<dyn SessionCommandService>,
    pub query_service: Arc<dyn SessionQueryService>,
    pub clock: Arc<dyn Clock>,
}

pub fn router(state: SessionRestControllerState) -> Router {
    Router::new()
        .route("/auth/session", post(issue_session).get(describe_session))
        .route("/auth/session/refresh", post(refresh_session))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/auth/session",
    tag = "iam",
    request_body = IssueSessionRequestResource,
    responses(
        (status = 200, description = "Session issued", body = SessionResponseResource),
        (status = 400, description = "Invalid request", body = IamErrorResponseResource),
        (status = 401, description = "Google token rejected or identity not authorized", body = IamErrorResponseResource),
        (status = 503, description = "Google unavailable", body = IamErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = IamErrorResponseResource)
    )
)]
pub async fn issue_session(
    State(state): State<SessionRestControllerState>,
    Json(request): Json<IssueSessionRequestResource>,
) -> Result<Json<SessionResponseResource>, (StatusCode, Json<IamErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = IssueSessionCommand::new(request.access_token, request.expires_in_seconds)
        .map_err(map_domain_error)?;

    let session = state
        .command_service
        .handle_issue(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_session_response(session, &state)))
}

#[utoipa::path(
    post,
    path = "/auth/session/refresh",
    tag = "iam",
    request_body = RefreshSessionRequestResource,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Session refreshed", body = SessionResponseResource),
        (status = 400, description = "Invalid request", body = IamErrorResponseResource),
        (status = 401, description = "Invalid session credential", body = IamErrorResponseResource),
        (status = 403, description = "Google token belongs to another identity", body = IamErrorResponseResource),
        (status = 503, description = "Google unavailable", body = IamErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = IamErrorResponseResource)
    )
)]
pub async fn refresh_session(
    State(state): State<SessionRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<RefreshSessionRequestResource>,
) -> Result<Json<SessionResponseResource>, (StatusCode, Json<IamErrorResponseResource>)> {
    let session_credential = extract_bearer_token(&headers).map_err(unauthorized)?;

    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = RefreshSessionCommand::new(
        session_credential,
        request.access_token,
        request.expires_in_seconds,
    )
    .map_err(map_domain_error)?;

    let session = state
        .command_service
        .handle_refresh(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_session_response(session, &state)))
}

#[utoipa::path(
    get,
    path = "/auth/session",
    tag = "iam",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Current session", body = SessionProfileResource),
        (status = 401, description = "Invalid session credential", body = IamErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = IamErrorResponseResource)
    )
)]
pub async fn describe_session(
    State(state): State<SessionRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<SessionProfileResource>, (StatusCode, Json<IamErrorResponseResource>)> {
    let session_credential = extract_bearer_token(&headers).map_err(unauthorized)?;

    let query = AuthenticateSessionQuery::new(session_credential).map_err(map_domain_error)?;
    let principal = state
        .query_service
        .handle_authenticate(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_profile(&principal.claims, &state)))
}

fn to_session_response(
    session: IssuedSession,
    state: &SessionRestControllerState,
) -> SessionResponseResource {
    SessionResponseResource {
        session_token: session.credential,
        token_type: TOKEN_TYPE.to_string(),
        expires_at: session.claims.expires_at,
        profile: to_profile(&session.claims, state),
    }
}

fn to_profile(claims: &SessionClaims, state: &SessionRestControllerState) -> SessionProfileResource {
    SessionProfileResource {
        subject: claims.subject.value().to_string(),
        display_name: claims.display_name.clone(),
        picture_url: claims.picture_url.clone(),
        role: claims.role,
        access_token_expires_at: claims.access_token_expires_at,
        access_token_expires_soon: claims.access_token_expires_within(
            state.clock.now(),
            Duration::minutes(ACCESS_TOKEN_EXPIRY_HINT_MINUTES),
        ),
        issued_at: claims.issued_at,
        expires_at: claims.expires_at,
    }
}

fn bad_request(message: String) -> (StatusCode, Json<IamErrorResponseResource>) {
    (
        StatusCode::BAD_REQUEST,
        Json(IamErrorResponseResource { message }),
    )
}

fn unauthorized(error: impl ToString) -> (StatusCode, Json<IamErrorResponseResource>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(IamErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

pub fn map_domain_error(error: IamDomainError) -> (StatusCode, Json<IamErrorResponseResource>) {
    let status = match error {
        IamDomainError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        IamDomainError::UntrustedCredential(_)
        | IamDomainError::InvalidSessionCredential
        | IamDomainError::VaultDecryptFailure => StatusCode::UNAUTHORIZED,
        IamDomainError::IdentityMismatch | IamDomainError::AccessDenied => StatusCode::FORBIDDEN,
        IamDomainError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        IamDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(IamErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
