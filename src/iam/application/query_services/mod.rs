pub mod session_query_service_impl;
