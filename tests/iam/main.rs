
mod session_credential_codec_tests;
mod session_query_service_tests;
