use axum::{Json, extract::State};
use serve_stats::dto::stats::{ReceiveSuccess, ServeEffectiveness};

use crate::state::SessionStore;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats/serve-effectiveness",
    responses(
        (status = 200, description = "Serve effectiveness per server and set, ordered by server then set", body = Vec<ServeEffectiveness>)
    ),
    tag = "stats"
)]
pub async fn get_serve_effectiveness(
    State(store): State<SessionStore>,
) -> Json<Vec<ServeEffectiveness>> {
    let session = store.lock().await;

    Json(services::serve_effectiveness(&session))
}

#[utoipa::path(
    get,
    path = "/api/stats/receive-success",
    responses(
        (status = 200, description = "Receive success rate per set", body = Vec<ReceiveSuccess>)
    ),
    tag = "stats"
)]
pub async fn get_receive_success(State(store): State<SessionStore>) -> Json<Vec<ReceiveSuccess>> {
    let session = store.lock().await;

    Json(services::receive_success(&session))
}
