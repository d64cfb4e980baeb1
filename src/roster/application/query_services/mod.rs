pub mod roster_query_service_impl;
