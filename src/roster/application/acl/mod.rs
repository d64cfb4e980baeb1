pub mod role_directory_facade_impl;
