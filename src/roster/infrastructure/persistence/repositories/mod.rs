pub mod roster_repository;
pub mod sheets_roster_repository_impl;
