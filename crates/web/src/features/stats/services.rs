use serve_stats::{
    MatchSession,
    dto::stats::{ReceiveSuccess, ServeEffectiveness},
    services::{effectiveness, receive},
};

/// Serve effectiveness per server and set
pub fn serve_effectiveness(session: &MatchSession) -> Vec<ServeEffectiveness> {
    effectiveness::compute_serve_effectiveness(session.records())
}

/// Receive success rate per set
pub fn receive_success(session: &MatchSession) -> Vec<ReceiveSuccess> {
    receive::compute_receive_success_rate(session.records())
}
