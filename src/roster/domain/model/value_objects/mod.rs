pub mod bootstrap_admins;
