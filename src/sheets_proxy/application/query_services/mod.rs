pub mod sheets_proxy_query_service_impl;
