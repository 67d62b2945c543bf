use axum::{Router, routing::get};

use super::handlers::export_rallies_csv;
use crate::state::SessionStore;

pub fn routes() -> Router<SessionStore> {
    Router::new().route("/rallies.csv", get(export_rallies_csv))
}
