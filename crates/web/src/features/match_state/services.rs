use serve_stats::{
    MatchSession,
    dto::match_state::{
        ConfirmServeOrderRequest, MatchStateResponse, RecordRallyRequest, RecordRallyResponse,
        UndoRallyResponse, UpdateMatchInfoRequest,
    },
    error::Result,
    models::RallyRecord,
};

/// Current scoring screen
pub fn match_state(session: &MatchSession) -> MatchStateResponse {
    MatchStateResponse::from(session)
}

/// Replace the match sheet header
pub fn update_match_info(
    session: &mut MatchSession,
    request: UpdateMatchInfoRequest,
) -> MatchStateResponse {
    session.update_info(request.into_match_info());
    MatchStateResponse::from(&*session)
}

/// Confirm both serve orders
pub fn confirm_serve_order(
    session: &mut MatchSession,
    request: &ConfirmServeOrderRequest,
) -> Result<MatchStateResponse> {
    let mine = request.my_serve_order.to_serve_order()?;
    let opponent = request.opponent_serve_order.to_serve_order()?;

    session.confirm_serve_orders(mine, opponent);
    Ok(MatchStateResponse::from(&*session))
}

/// Record one rally
pub fn record_rally(
    session: &mut MatchSession,
    request: &RecordRallyRequest,
) -> Result<RecordRallyResponse> {
    let record = session.record_rally(request.result, request.point_winner)?;

    Ok(RecordRallyResponse {
        record,
        state: MatchStateResponse::from(&*session),
    })
}

/// The full rally log, oldest first
pub fn list_rallies(session: &MatchSession) -> Vec<RallyRecord> {
    session.records().to_vec()
}

/// Take back the last rally
pub fn undo_last_rally(session: &mut MatchSession) -> UndoRallyResponse {
    let removed = session.undo_last_rally();

    UndoRallyResponse {
        undone: removed.is_some(),
        removed,
        state: MatchStateResponse::from(&*session),
    }
}

/// Close the set using the match sheet's set point
pub fn complete_set(session: &mut MatchSession) -> Result<MatchStateResponse> {
    session.complete_current_set()?;
    Ok(MatchStateResponse::from(&*session))
}
