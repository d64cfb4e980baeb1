use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use sheets_auth_gateway::shared::domain::model::{
    entities::caller_context::CallerContext,
    enums::user_role::UserRole,
    value_objects::{identity_email::IdentityEmail, third_party_access_token::ThirdPartyAccessToken},
};

pub const ROSTER_TAB: &str = "Users";

pub const ADMIN_CREDENTIAL: &str = "session.admin.credential";
pub const USER_CREDENTIAL: &str = "session.user.credential";

fn caller(email: &str, token: &str, role: UserRole) -> CallerContext {
    CallerContext {
        email: IdentityEmail::new(email.to_string()).expect("valid email"),
        role,
        access_token: ThirdPartyAccessToken::new(token.to_string()).expect("valid token"),
    }
}

pub fn admin_caller() -> CallerContext {
    caller("boss@x.com", "ya29.admin-token", UserRole::Admin)
}

pub fn user_caller() -> CallerContext {
    caller("member@x.com", "ya29.member-token", UserRole::User)
}

pub fn bearer_headers(credential: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {credential}")).expect("valid header"),
    );
    headers
}
