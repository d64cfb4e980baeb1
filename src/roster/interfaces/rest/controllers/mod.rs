pub mod roster_rest_controller;
