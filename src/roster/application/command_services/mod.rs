pub mod roster_command_service_impl;
