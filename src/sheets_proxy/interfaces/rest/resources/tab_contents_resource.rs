use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::sheets_proxy::domain::model::entities::tab_contents::TabContents;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SheetRowResource {
    pub row_number: u32,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TabContentsResource {
    pub tab: String,
    pub header: Vec<Value>,
    pub rows: Vec<SheetRowResource>,
}

impl From<TabContents> for TabContentsResource {
    fn from(contents: TabContents) -> Self {
        Self {
            tab: contents.tab.value().to_string(),
            header: contents.header,
            rows: contents
                .rows
                .into_iter()
                .map(|row| SheetRowResource {
                    row_number: row.row_number,
                    values: row.values,
                })
                .collect(),
        }
    }
}
