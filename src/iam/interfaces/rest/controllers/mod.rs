pub mod session_rest_controller;
