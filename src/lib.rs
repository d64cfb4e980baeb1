pub mod config;
pub mod iam;
pub mod roster;
pub mod sheets_proxy;
pub mod shared;
