pub mod append_row_response_resource;
pub mod row_values_request_resource;
pub mod sheets_proxy_error_response_resource;
pub mod tab_contents_resource;
