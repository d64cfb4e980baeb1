use crate::iam::domain::model::entities::session_claims::SessionClaims;

#[derive(Clone, Debug)]
pub struct IssuedSession {
    pub credential: String,
    pub claims: SessionClaims,
}
