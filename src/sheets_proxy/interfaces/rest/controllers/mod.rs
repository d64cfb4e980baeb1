pub mod sheets_proxy_rest_controller;
