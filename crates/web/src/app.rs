use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::middleware::auth::ApiKeys;
use crate::state::SessionStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::match_state::handlers::get_match_state,
        features::match_state::handlers::update_match_info,
        features::match_state::handlers::confirm_serve_order,
        features::match_state::handlers::record_rally,
        features::match_state::handlers::list_rallies,
        features::match_state::handlers::undo_last_rally,
        features::match_state::handlers::complete_set,
        features::stats::handlers::get_serve_effectiveness,
        features::stats::handlers::get_receive_success,
        features::export::handlers::export_rallies_csv,
    ),
    components(
        schemas(
            serve_stats::dto::match_state::UpdateMatchInfoRequest,
            serve_stats::dto::match_state::ConfirmServeOrderRequest,
            serve_stats::dto::match_state::ServeOrderInput,
            serve_stats::dto::match_state::RecordRallyRequest,
            serve_stats::dto::match_state::MatchStateResponse,
            serve_stats::dto::match_state::RecordRallyResponse,
            serve_stats::dto::match_state::UndoRallyResponse,
            serve_stats::dto::stats::ServeEffectiveness,
            serve_stats::dto::stats::ReceiveSuccess,
            serve_stats::models::MatchInfo,
            serve_stats::models::Phase,
            serve_stats::models::PlayerId,
            serve_stats::models::RallyRecord,
            serve_stats::models::ResultCategory,
            serve_stats::models::Rotations,
            serve_stats::models::ServeOrder,
            serve_stats::models::Side,
        )
    ),
    tags(
        (name = "match", description = "Scoring commands and match state"),
        (name = "stats", description = "Derived serve and receive statistics"),
        (name = "export", description = "Rally log export"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

pub fn build_router(store: SessionStore, api_keys: ApiKeys) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/match", features::match_state::routes::routes(api_keys))
        .nest("/stats", features::stats::routes::routes())
        .nest("/export", features::export::routes::routes());

    Router::new()
        .nest("/api", api)
        .with_state(store)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
