pub mod list_rows_query;
