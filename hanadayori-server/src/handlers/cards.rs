use axum::{
    Json,
    extract::{RawQuery, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;

use hanadayori_core::LinkCodec;
use hanadayori_core::api::types::CreateCardResponse;
use hanadayori_model::CardState;

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Encode a card into a share link on the viewer page.
pub async fn create_card_handler(
    State(state): State<AppState>,
    card: Result<Json<CardState>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateCardResponse>)> {
    let Json(card) = card?;
    let link = state.codec.encode(&state.view_url, &card)?;
    info!(len = link.as_str().len(), "share link created");

    Ok((
        StatusCode::CREATED,
        Json(CreateCardResponse { link: link.into() }),
    ))
}

/// Read a card back from share-link query parameters.
pub async fn resolve_card_handler(
    RawQuery(query): RawQuery,
) -> AppResult<Json<CardState>> {
    LinkCodec::decode_query(query.as_deref().unwrap_or_default())
        .into_card()
        .map(Json)
        .ok_or_else(|| AppError::not_found("Card not found"))
}
