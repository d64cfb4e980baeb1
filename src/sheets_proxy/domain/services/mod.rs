pub mod sheets_proxy_command_service;
pub mod sheets_proxy_query_service;
