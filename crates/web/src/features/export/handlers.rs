use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serve_stats::services::export::EXPORT_FILE_NAME;

use crate::error::WebError;
use crate::state::SessionStore;

use super::services;

#[utoipa::path(
    get,
    path = "/api/export/rallies.csv",
    responses(
        (status = 200, description = "Rally log as UTF-8 CSV with byte-order mark", content_type = "text/csv")
    ),
    tag = "export"
)]
pub async fn export_rallies_csv(State(store): State<SessionStore>) -> Result<Response, WebError> {
    let session = store.lock().await;
    let csv = services::rally_log_csv(&session)?;

    tracing::info!(rallies = session.rally_count(), "Exporting rally log");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        csv,
    )
        .into_response())
}
