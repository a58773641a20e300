use axum::{
    extract::RawQuery,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::debug;

use hanadayori_core::api::routes::pages;
use hanadayori_core::{Decoded, FLOWER_KINDS, LinkCodec};

use crate::pages::{card_page, home_page};

pub async fn home_handler() -> Html<String> {
    Html(home_page(&FLOWER_KINDS).into_string())
}

/// Render the card a share link describes, or send the visitor to the
/// creation page when the link is incomplete.
pub async fn view_card_handler(RawQuery(query): RawQuery) -> Response {
    match LinkCodec::decode_query(query.as_deref().unwrap_or_default()) {
        Decoded::Card(card) => {
            Html(card_page(&card).into_string()).into_response()
        }
        Decoded::Incomplete => {
            debug!("incomplete share link; redirecting home");
            Redirect::to(pages::HOME).into_response()
        }
    }
}
