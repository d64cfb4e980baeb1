pub mod session_authentication_facade_impl;
