use thiserror::Error;

#[derive(Debug, Error)]
pub enum IamDomainError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("untrusted credential: {0}")]
    UntrustedCredential(String),

    #[error("session credential is invalid or expired")]
    InvalidSessionCredential,

    #[error("third-party token is unavailable, re-authentication required")]
    VaultDecryptFailure,

    #[error("refreshed identity does not match the current session")]
    IdentityMismatch,

    #[error("access denied")]
    AccessDenied,

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
