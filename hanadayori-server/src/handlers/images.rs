use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::Value;
use tracing::debug;

use hanadayori_core::api::types::{ImageSearchParams, PageParams};
use hanadayori_core::flowers::DEFAULT_QUERY;
use hanadayori_core::providers::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, variety_query,
};
use hanadayori_core::{FLOWER_KINDS, FlowerKind, SearchQuery};
use hanadayori_model::Orientation;

use crate::errors::AppResult;
use crate::state::AppState;

/// Forward a photo search to the provider and return its body verbatim.
///
/// The credential comes from server configuration; nothing the client
/// sends, including an `Authorization` header, reaches the upstream
/// request except the four search parameters.
pub async fn search_images_handler(
    State(state): State<AppState>,
    params: Result<Query<ImageSearchParams>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(params) = params?;
    let orientation = match params.orientation.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.parse::<Orientation>()?,
        _ => Orientation::default(),
    };
    let query = params
        .query
        .filter(|query| !query.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    let search = SearchQuery::new(
        query,
        params.page.unwrap_or(DEFAULT_PAGE),
        params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        orientation,
    );
    debug!(query = %search.query, page = search.page, "proxying image search");

    let body = state.images.search_raw(&search).await?;
    Ok(Json(body))
}

/// One page for a randomly chosen variety term, verbatim.
pub async fn variety_images_handler(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(params) = params?;
    let search = variety_query(
        params.page.unwrap_or(DEFAULT_PAGE),
        params.per_page.unwrap_or(DEFAULT_PER_PAGE),
    );
    debug!(query = %search.query, page = search.page, "variety search");

    let body = state.images.search_raw(&search).await?;
    Ok(Json(body))
}

pub async fn flower_catalog_handler() -> Json<Vec<FlowerKind>> {
    Json(FLOWER_KINDS.to_vec())
}
