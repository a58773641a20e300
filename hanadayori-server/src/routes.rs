use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use hanadayori_config::CorsConfig;
use hanadayori_core::api::routes::{api, health, pages};

use crate::handlers;
use crate::state::AppState;

/// JSON API under `/api`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(
            api::images::SEARCH,
            get(handlers::images::search_images_handler),
        )
        .route(
            api::images::VARIETY,
            get(handlers::images::variety_images_handler),
        )
        .route(
            api::flowers::CATALOG,
            get(handlers::images::flower_catalog_handler),
        )
        .route(
            api::cards::CREATE,
            post(handlers::cards::create_card_handler),
        )
        .route(
            api::cards::RESOLVE,
            get(handlers::cards::resolve_card_handler),
        )
}

pub fn create_app(state: AppState) -> Router {
    let cors_layer = if state.config().dev_mode {
        CorsLayer::permissive()
    } else {
        cors_allow_list(&state.config().cors)
    };

    Router::new()
        .route(pages::HOME, get(handlers::pages::home_handler))
        .route(pages::VIEW, get(handlers::pages::view_card_handler))
        .route(health::PING, get(handlers::health::ping_handler))
        .route(health::HEALTH, get(handlers::health::health_handler))
        .merge(create_api_router())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_allow_list(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(
                        %origin,
                        "ignoring CORS origin that is not a valid header value"
                    );
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
