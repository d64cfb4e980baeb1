pub mod add_roster_entry_command;
pub mod change_roster_entry_role_command;
pub mod remove_roster_entry_command;
