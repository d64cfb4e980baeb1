pub mod session_command_service_impl;
