pub mod role_directory_facade;
pub mod session_authentication_facade;
