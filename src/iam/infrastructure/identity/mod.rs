pub mod google_identity_provider_repository_impl;
pub mod identity_provider_repository;
