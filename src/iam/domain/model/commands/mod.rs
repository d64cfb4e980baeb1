pub mod issue_session_command;
pub mod refresh_session_command;
