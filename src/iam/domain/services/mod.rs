pub mod session_command_service;
pub mod session_query_service;
