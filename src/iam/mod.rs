use std::sync::Arc;

use axum::Router;
use reqwest::Client;

use crate::{
    config::app_config::AppConfig,
    iam::{
        application::{
            acl::session_authentication_facade_impl::SessionAuthenticationFacadeImpl,
            command_services::session_command_service_impl::{
                SessionCommandServiceImpl, SessionPolicy,
            },
            query_services::session_query_service_impl::SessionQueryServiceImpl,
        },
        infrastructure::{
            crypto::{
                aes_gcm_token_vault_impl::AesGcmTokenVaultImpl,
                jwt_session_credential_codec_impl::JwtSessionCredentialCodecImpl,
            },
            identity::google_identity_provider_repository_impl::GoogleIdentityProviderRepositoryImpl,
        },
        interfaces::{
            acl::{
                role_directory_facade::RoleDirectoryFacade,
                session_authentication_facade::SessionAuthenticationFacade,
            },
            rest::controllers::session_rest_controller::{SessionRestControllerState, router},
        },
    },
    shared::domain::clock::Clock,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// The session routes plus the facade other contexts authenticate callers with.
pub struct IamContext {
    pub router: Router,
    pub authentication_facade: Arc<dyn SessionAuthenticationFacade>,
}

pub fn build_iam_context(
    config: &AppConfig,
    http: Client,
    role_directory: Arc<dyn RoleDirectoryFacade>,
    clock: Arc<dyn Clock>,
) -> IamContext {
    let identity_provider = Arc::new(GoogleIdentityProviderRepositoryImpl::new(
        http,
        config.google_userinfo_url.clone(),
        config.identity_cache_ttl,
    ));
    let token_vault = Arc::new(AesGcmTokenVaultImpl::new(&config.session_secret));
    let credential_codec = Arc::new(JwtSessionCredentialCodecImpl::new(&config.session_secret));

    let command_service = Arc::new(SessionCommandServiceImpl::new(
        identity_provider,
        role_directory,
        token_vault.clone(),
        credential_codec.clone(),
        clock.clone(),
        SessionPolicy {
            session_ttl: config.session_ttl,
            default_access_token_ttl: config.third_party_token_ttl,
        },
    ));
    let query_service = Arc::new(SessionQueryServiceImpl::new(
        token_vault,
        credential_codec,
        clock.clone(),
    ));
    let authentication_facade = Arc::new(SessionAuthenticationFacadeImpl::new(query_service.clone()));

    IamContext {
        router: router(SessionRestControllerState {
            command_service,
            query_service,
            clock,
        }),
        authentication_facade,
    }
}
