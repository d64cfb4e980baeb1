pub mod iam_error_response_resource;
pub mod issue_session_request_resource;
pub mod refresh_session_request_resource;
pub mod session_response_resource;
