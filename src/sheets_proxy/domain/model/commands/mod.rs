pub mod append_row_command;
pub mod delete_row_command;
pub mod update_row_command;
