use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use uuid::Uuid;

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
            },
            services::session_command_service::SessionCommandService,
        },
        infrastructure::{
            crypto::{session_credential_codec::SessionCredentialCodec, token_vault::TokenVault},
            identity::identity_provider_repository::{
                IdentityProfile, IdentityProviderError, IdentityProviderRepository,
            },
        },
        interfaces::acl::role_directory_facade::RoleDirectoryFacade,
    },
    shared::domain::{
        clock::Clock,
        model::value_objects::{
            identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken,
        },
    },
};

#[derive(Clone, Copy, Debug)]
pub struct SessionPolicy {
    pub session_ttl: Duration,
    /// Used when the client does not say how long its Google token lives.
    pub default_access_token_ttl: Duration,
}

pub struct SessionCommandServiceImpl {
    identity_provider: Arc<dyn IdentityProviderRepository>,
    role_directory: Arc<dyn RoleDirectoryFacade>,
    token_vault: Arc<dyn TokenVault>,
    credential_codec: Arc<dyn SessionCredentialCodec>,
    clock: Arc<dyn Clock>,
    policy: SessionPolicy,
}

impl SessionCommandServiceImpl {
    pub fn new(
        identity_provider: Arc<dyn IdentityProviderRepository>,
        role_directory: Arc<dyn RoleDirectoryFacade>,
        token_vault: Arc<dyn TokenVault>,
        credential_codec: Arc<dyn SessionCredentialCodec>,
        clock: Arc<dyn Clock>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            identity_provider,
            role_directory,
            token_vault,
            credential_codec,
            clock,
            policy,
        }
    }

    async fn verify_identity(
        &self,
        access_token: &ThirdPartyAccessToken,
    ) -> Result<(IdentityEmail, IdentityProfile), IamDomainError> {
        let profile = self
            .identity_provider
            .fetch_profile(access_token)
            .await
            .map_err(|error| match error {
                IdentityProviderError::Rejected { .. } => IamDomainError::UntrustedCredential(
                    "upstream token is invalid or expired".to_string(),
                ),
                IdentityProviderError::Unavailable(message) => {
                    IamDomainError::UpstreamUnavailable(message)
                }
            })?;

        if profile.email_verified == Some(false) {
            return Err(IamDomainError::UntrustedCredential(
                "identity email is not verified".to_string(),
            ));
        }

        let email = profile
            .email
            .clone()
            .ok_or_else(|| IamDomainError::UntrustedCredential("identity has no email".to_string()))
            .and_then(|email| {
                IdentityEmail::new(email).map_err(|_| {
                    IamDomainError::UntrustedCredential("identity email is invalid".to_string())
                })
            })?;

        Ok((email, profile))
    }

    async fn mint(
        &self,
        email: IdentityEmail,
        profile: IdentityProfile,
        access_token: &ThirdPartyAccessToken,
        expires_in: Option<Duration>,
    ) -> Result<IssuedSession, IamDomainError> {
        let role = self
            .role_directory
            .resolve_role(&email, access_token)
            .await
            .map_err(|e| IamDomainError::UpstreamUnavailable(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(subject = %email, "identity is not authorized");
                IamDomainError::UntrustedCredential("identity is not authorized".to_string())
            })?;

        let encrypted_access_token = self.token_vault.encrypt(access_token.expose())?;

        let now = self.clock.now_seconds();
        let access_token_ttl = expires_in.unwrap_or(self.policy.default_access_token_ttl);

        let claims = SessionClaims {
            credential_id: Uuid::now_v7().to_string(),
            subject: email,
            display_name: profile.name,
            picture_url: profile.picture,
            role,
            encrypted_access_token,
            access_token_expires_at: add_to(now, access_token_ttl)?,
            issued_at: now,
            expires_at: add_to(now, self.policy.session_ttl)?,
        };

        let credential = self.credential_codec.sign(&claims)?;

        Ok(IssuedSession { credential, claims })
    }
}

#[async_trait]
impl SessionCommandService for SessionCommandServiceImpl {
    async fn handle_issue(
        &self,
        command: IssueSessionCommand,
    ) -> Result<IssuedSession, IamDomainError> {
        let (email, profile) = self.verify_identity(command.access_token()).await?;

        let session = self
            .mint(email, profile, command.access_token(), command.expires_in())
            .await?;

        tracing::info!(
            subject = %session.claims.subject,
            role = %session.claims.role,
            credential_id = %session.claims.credential_id,
            "session issued"
        );

        Ok(session)
    }

    async fn handle_refresh(
        &self,
        command: RefreshSessionCommand,
    ) -> Result<IssuedSession, IamDomainError> {
        let current = self
            .credential_codec
            .verify(command.session_credential(), self.clock.now())?;

        let (email, profile) = self.verify_identity(command.access_token()).await?;

        if email != current.subject {
            tracing::warn!(
                subject = %current.subject,
                presented = %email,
                "session refresh attempted with a different identity"
            );
            return Err(IamDomainError::IdentityMismatch);
        }

        let session = self
            .mint(email, profile, command.access_token(), command.expires_in())
            .await?;

        tracing::info!(
            subject = %session.claims.subject,
            role = %session.claims.role,
            previous_credential_id = %current.credential_id,
            credential_id = %session.claims.credential_id,
            "session refreshed"
        );

        Ok(session)
    }
}

fn add_to(
    instant: chrono::DateTime<chrono::Utc>,
    duration: Duration,
) -> Result<chrono::DateTime<chrono::Utc>, IamDomainError> {
    chrono::Duration::from_std(duration)
        .ok()
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or_else(|| {
            IamDomainError::InfrastructureError("session lifetime is out of range".to_string())
        })
}
