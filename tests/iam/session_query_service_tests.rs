use chrono::Duration;
use sheets_auth_gateway::{
    iam::{
        application::acl::session_authentication_facade_impl::SessionAuthenticationFacadeImpl,
        domain::{
            model::{
                enums::iam_domain_error::IamDomainError,
                queries::authenticate_session_query::AuthenticateSessionQuery,
            },
            services::{
                session_command_service::SessionCommandService,
                session_query_service::SessionQueryService,
            },
        },
        infrastructure::crypto::session_credential_codec::SessionCredentialCodec,
        interfaces::acl::session_authentication_facade::SessionAuthenticationFacade,
    },
    shared::domain::model::enums::user_role::UserRole,
};

use crate::support::{
    BOSS_EMAIL, BOSS_TOKEN, MEMBER_TOKEN, create_session_harness, fixed_now, issue_command,
    sample_claims,
};

#[tokio::test]
async fn authenticate_returns_claims_and_decrypted_token() {
    let harness = create_session_harness();
    let session = harness
        .command_service
        .handle_issue(issue_command(BOSS_TOKEN))
        .await
        .expect("boss is authorized");

    let principal = harness
        .query_service
        .handle_authenticate(
            AuthenticateSessionQuery::new(session.credential).expect("valid query"),
        )
        .await
        .expect("credential authenticates");

    assert_eq!(principal.claims, session.claims);
    assert_eq!(principal.access_token.expose(), BOSS_TOKEN);

    let caller = principal.caller_context();
    assert_eq!(caller.email.value(), BOSS_EMAIL);
    assert!(caller.is_admin());
}

#[tokio::test]
async fn authenticate_rejects_expired_credentials() {
    let harness = create_session_harness();
    let session = harness
        .command_service
        .handle_issue(issue_command(MEMBER_TOKEN))
        .await
        .expect("member is authorized");

    harness.clock.advance(Duration::hours(8));

    let result = harness
        .query_service
        .handle_authenticate(AuthenticateSessionQuery::new(session.credential).expect("valid query"))
        .await;

    assert!(matches!(result, Err(IamDomainError::InvalidSessionCredential)));
}

#[tokio::test]
async fn validly_signed_credential_with_unreadable_blob_is_a_vault_failure() {
    let harness = create_session_harness();
    let credential = harness
        .codec
        .sign(&sample_claims(fixed_now(), Duration::hours(8)))
        .expect("signing succeeds");

    let result = harness
        .query_service
        .handle_authenticate(AuthenticateSessionQuery::new(credential).expect("valid query"))
        .await;

    assert!(matches!(result, Err(IamDomainError::VaultDecryptFailure)));
}

#[tokio::test]
async fn authentication_facade_delegates_to_the_query_service() {
    let harness = create_session_harness();
    let facade = SessionAuthenticationFacadeImpl::new(harness.query_service.clone());
    let session = harness
        .command_service
        .handle_issue(issue_command(MEMBER_TOKEN))
        .await
        .expect("member is authorized");

    let principal = facade
        .authenticate(&session.credential)
        .await
        .expect("credential authenticates");

    assert_eq!(principal.claims.role, UserRole::User);
    assert!(matches!(
        facade.authenticate("   ").await,
        Err(IamDomainError::InvalidSessionCredential)
    ));
}
