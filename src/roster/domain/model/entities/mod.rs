pub mod roster_entry;
pub mod roster_snapshot;
