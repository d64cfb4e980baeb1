pub mod row_number;
pub mod row_values;
pub mod tab_name;
