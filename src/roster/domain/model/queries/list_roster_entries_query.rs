use crate::shared::domain::model::entities::caller_context::CallerContext;

#[derive(Clone, Debug)]
pub struct ListRosterEntriesQuery {
    caller: CallerContext,
}

impl ListRosterEntriesQuery {
    pub fn new(caller: CallerContext) -> Self {
        Self { caller }
    }

    pub fn caller(&self) -> &CallerContext {
        &self.caller
    }
}
