use crate::models::{MatchState, RallyRecord};

/// Append-only rally log.
///
/// Every record is paired with the match state as it stood before the rally,
/// serve orders included, so removing the last record can put the state back
/// exactly.
#[derive(Debug, Clone, Default)]
pub struct RallyLog {
    records: Vec<RallyRecord>,
    states_before: Vec<MatchState>,
}

impl RallyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: RallyRecord, state_before: MatchState) {
        self.records.push(record);
        self.states_before.push(state_before);
    }

    /// Removes the newest record, returning it with the state it replaced.
    pub fn pop_last(&mut self) -> Option<(RallyRecord, MatchState)> {
        let record = self.records.pop()?;
        let state = self.states_before.pop()?;
        Some((record, state))
    }

    pub fn records(&self) -> &[RallyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
