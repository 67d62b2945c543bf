use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    complete_set, confirm_serve_order, get_match_state, list_rallies, record_rally,
    undo_last_rally, update_match_info,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::SessionStore;

pub fn routes(api_keys: ApiKeys) -> Router<SessionStore> {
    let protected = Router::new()
        .route("/info", put(update_match_info))
        .route("/serve-order", post(confirm_serve_order))
        .route("/rallies", post(record_rally))
        .route("/rallies/last", delete(undo_last_rally))
        .route("/sets/complete", post(complete_set))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(get_match_state))
        .route("/rallies", get(list_rallies))
        .merge(protected)
}
