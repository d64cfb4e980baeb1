use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterDomainError {
    #[error("email is invalid")]
    InvalidEmail,

    #[error("role must be one of: admin, user")]
    InvalidRole,

    #[error("access denied")]
    AccessDenied,

    #[error("bootstrap admins cannot be changed through the roster")]
    BootstrapAdminImmutable,

    #[error("roster entry already exists")]
    EntryAlreadyExists,

    #[error("roster entry not found")]
    EntryNotFound,

    #[error("spreadsheet api rejected the request ({status}): {message}")]
    UpstreamRejected { status: u16, message: String },

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl RosterDomainError {
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, Self::UpstreamRejected { status, .. } if *status == 401 || *status == 403)
    }
}
