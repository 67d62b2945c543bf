use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serve_stats::{
    dto::match_state::{
        ConfirmServeOrderRequest, MatchStateResponse, RecordRallyRequest, RecordRallyResponse,
        UndoRallyResponse, UpdateMatchInfoRequest,
    },
    models::RallyRecord,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::SessionStore;

use super::services;

#[utoipa::path(
    get,
    path = "/api/match",
    responses(
        (status = 200, description = "Current match state", body = MatchStateResponse)
    ),
    tag = "match"
)]
pub async fn get_match_state(State(store): State<SessionStore>) -> Json<MatchStateResponse> {
    let session = store.lock().await;

    Json(services::match_state(&session))
}

#[utoipa::path(
    put,
    path = "/api/match/info",
    request_body = UpdateMatchInfoRequest,
    responses(
        (status = 200, description = "Match sheet updated", body = MatchStateResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "match"
)]
pub async fn update_match_info(
    State(store): State<SessionStore>,
    Json(payload): Json<UpdateMatchInfoRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let mut session = store.lock().await;
    let response = services::update_match_info(&mut session, payload);

    tracing::info!(
        date = %response.info.date,
        set_point = response.info.set_point,
        "Match info updated"
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/match/serve-order",
    request_body = ConfirmServeOrderRequest,
    responses(
        (status = 200, description = "Serve orders confirmed", body = MatchStateResponse),
        (status = 400, description = "Invalid serve order")
    ),
    tag = "match"
)]
pub async fn confirm_serve_order(
    State(store): State<SessionStore>,
    Json(payload): Json<ConfirmServeOrderRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let mut session = store.lock().await;
    let response = services::confirm_serve_order(&mut session, &payload)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/match/rallies",
    request_body = RecordRallyRequest,
    responses(
        (status = 201, description = "Rally recorded", body = RecordRallyResponse),
        (status = 409, description = "Serve order not confirmed")
    ),
    tag = "match"
)]
pub async fn record_rally(
    State(store): State<SessionStore>,
    Json(payload): Json<RecordRallyRequest>,
) -> Result<Response, WebError> {
    let mut session = store.lock().await;
    let response = services::record_rally(&mut session, &payload)?;

    Ok((axum::http::StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/match/rallies",
    responses(
        (status = 200, description = "Rally log, oldest first", body = Vec<RallyRecord>)
    ),
    tag = "match"
)]
pub async fn list_rallies(State(store): State<SessionStore>) -> Json<Vec<RallyRecord>> {
    let session = store.lock().await;

    Json(services::list_rallies(&session))
}

#[utoipa::path(
    delete,
    path = "/api/match/rallies/last",
    responses(
        (status = 200, description = "Last rally removed, or nothing to undo", body = UndoRallyResponse)
    ),
    tag = "match"
)]
pub async fn undo_last_rally(State(store): State<SessionStore>) -> Json<UndoRallyResponse> {
    let mut session = store.lock().await;
    let response = services::undo_last_rally(&mut session);

    if !response.undone {
        tracing::debug!("Undo requested on an empty log");
    }

    Json(response)
}

#[utoipa::path(
    post,
    path = "/api/match/sets/complete",
    responses(
        (status = 200, description = "Next set started", body = MatchStateResponse),
        (status = 409, description = "Set point not reached yet")
    ),
    tag = "match"
)]
pub async fn complete_set(State(store): State<SessionStore>) -> Result<Response, WebError> {
    let mut session = store.lock().await;
    let response = services::complete_set(&mut session)?;

    Ok(Json(response).into_response())
}
