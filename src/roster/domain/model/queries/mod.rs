pub mod list_roster_entries_query;
