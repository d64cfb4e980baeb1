use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    roster::domain::model::{
        entities::roster_entry::RosterEntry, enums::roster_entry_source::RosterEntrySource,
    },
    shared::domain::model::enums::user_role::UserRole,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RosterEntryResource {
    pub email: String,
    pub role: UserRole,
    pub source: RosterEntrySource,
    pub row_number: Option<u32>,
    pub added_by: Option<String>,
    pub added_at: Option<DateTime<Utc>>,
}

impl From<RosterEntry> for RosterEntryResource {
    fn from(entry: RosterEntry) -> Self {
        Self {
            email: entry.email.value().to_string(),
            role: entry.role,
            source: entry.source,
            row_number: entry.row_number,
            added_by: entry.added_by,
            added_at: entry.added_at,
        }
    }
}
