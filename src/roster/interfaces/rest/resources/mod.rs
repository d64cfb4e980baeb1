pub mod add_roster_entry_request_resource;
pub mod change_roster_entry_role_request_resource;
pub mod roster_entry_resource;
pub mod roster_error_response_resource;
