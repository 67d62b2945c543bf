use std::sync::Arc;

use serve_stats::MatchSession;
use tokio::sync::{Mutex, MutexGuard};

/// The one match being scored by this server.
///
/// Handlers hold the lock for the whole command, so rallies are applied
/// strictly one after another.
#[derive(Clone)]
pub struct SessionStore {
    session: Arc<Mutex<MatchSession>>,
}

impl SessionStore {
    pub fn new(session: MatchSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, MatchSession> {
        self.session.lock().await
    }
}
