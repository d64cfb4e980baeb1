pub mod google_sheets_gateway_impl;
pub mod spreadsheet_gateway;
