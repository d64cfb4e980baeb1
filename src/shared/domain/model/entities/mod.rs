pub mod caller_context;
