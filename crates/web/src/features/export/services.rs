use serve_stats::{MatchSession, error::Result, services::export};

/// CSV snapshot of the rally log
pub fn rally_log_csv(session: &MatchSession) -> Result<Vec<u8>> {
    export::export_csv(session.records())
}
