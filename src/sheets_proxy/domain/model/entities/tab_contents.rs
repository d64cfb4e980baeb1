use serde_json::Value;

use crate::{
    sheets_proxy::domain::model::value_objects::tab_name::TabName,
    shared::infrastructure::google_sheets::spreadsheet_gateway::SheetRow,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TabContents {
    pub tab: TabName,
    pub header: Vec<Value>,
    pub rows: Vec<SheetRow>,
}
