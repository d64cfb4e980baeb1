pub mod sheets_proxy_command_service_impl;
