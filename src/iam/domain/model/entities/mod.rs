pub mod authenticated_principal;
pub mod issued_session;
pub mod session_claims;
