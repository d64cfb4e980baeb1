pub mod roster_command_service;
pub mod roster_query_service;
