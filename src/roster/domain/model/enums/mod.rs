pub mod roster_domain_error;
pub mod roster_entry_source;
