pub mod bearer_token;
pub mod openapi;
