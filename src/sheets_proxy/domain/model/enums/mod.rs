pub mod sheets_proxy_domain_error;
