use axum::{Router, routing::get};

use super::handlers::{get_receive_success, get_serve_effectiveness};
use crate::state::SessionStore;

pub fn routes() -> Router<SessionStore> {
    Router::new()
        .route("/serve-effectiveness", get(get_serve_effectiveness))
        .route("/receive-success", get(get_receive_success))
}
