use async_trait::async_trait;

use crate::iam::domain::model::{
    commands::{
        issue_session_command::IssueSessionCommand,
        refresh_session_command::RefreshSessionCommand,
    },
    entities::issued_session::IssuedSession,
    enums::iam_domain_error::IamDomainError,
};

#[async_trait]
pub trait SessionCommandService: Send + Sync {
    async fn handle_issue(
        &self,
        command: IssueSessionCommand,
    ) -> Result<IssuedSession, IamDomainError>;

    async fn handle_refresh(
        &self,
        command: RefreshSessionCommand,
    ) -> Result<IssuedSession, IamDomainError>;
}
