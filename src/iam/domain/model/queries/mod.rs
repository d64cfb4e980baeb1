pub mod authenticate_session_query;
