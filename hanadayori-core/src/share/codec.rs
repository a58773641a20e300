use std::collections::HashMap;

use hanadayori_model::CardState;
use url::{Url, form_urlencoded};

use crate::error::LinkError;

pub const KEY_IMAGE_URL: &str = "imageUrl";
pub const KEY_PHOTOGRAPHER: &str = "photographer";
pub const KEY_MESSAGE: &str = "message";

/// Ceiling on the full encoded link, in bytes.
///
/// Chosen below the common 8 KiB request-line limit of proxies and CDNs,
/// well above what a hand-written message with a provider image URL needs.
pub const DEFAULT_MAX_LINK_LEN: usize = 8000;
/// Smallest ceiling accepted from configuration.
pub const MIN_LINK_LEN: usize = 256;

/// Outcome of reading a card back from a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Card(CardState),
    /// At least one of the three keys was absent.
    Incomplete,
}

impl Decoded {
    pub fn into_card(self) -> Option<CardState> {
        match self {
            Decoded::Card(card) => Some(card),
            Decoded::Incomplete => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCodec {
    max_len: usize,
}

impl Default for LinkCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINK_LEN)
    }
}

impl LinkCodec {
    pub const fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// `base + "?" + urlencode(imageUrl, photographer, message)`, always in
    /// that key order. Any query or fragment already on `base` is dropped.
    pub fn encode(
        &self,
        base: &Url,
        state: &CardState,
    ) -> Result<Url, LinkError> {
        if state.image_url.is_empty() {
            return Err(LinkError::EmptyImageUrl);
        }
        if base.cannot_be_a_base() {
            return Err(LinkError::InvalidBase(base.to_string()));
        }

        let mut link = base.clone();
        link.set_fragment(None);
        link.set_query(None);
        link.query_pairs_mut()
            .append_pair(KEY_IMAGE_URL, &state.image_url)
            .append_pair(KEY_PHOTOGRAPHER, &state.photographer)
            .append_pair(KEY_MESSAGE, &state.message);

        let len = link.as_str().len();
        if len > self.max_len {
            return Err(LinkError::TooLarge {
                len,
                limit: self.max_len,
            });
        }

        Ok(link)
    }

    /// Read a card from already-parsed query parameters. An empty value
    /// counts as present; only a missing key makes the card incomplete.
    pub fn decode(params: &HashMap<String, String>) -> Decoded {
        let field = |key: &str| params.get(key).cloned();
        match (
            field(KEY_IMAGE_URL),
            field(KEY_PHOTOGRAPHER),
            field(KEY_MESSAGE),
        ) {
            (Some(image_url), Some(photographer), Some(message)) => {
                Decoded::Card(CardState {
                    image_url,
                    photographer,
                    message,
                })
            }
            _ => Decoded::Incomplete,
        }
    }

    /// Read a card from a raw (still percent-encoded) query string. When a
    /// key repeats, its first occurrence wins.
    pub fn decode_query(query: &str) -> Decoded {
        let mut params = HashMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self::decode(&params)
    }

    pub fn decode_url(link: &Url) -> Decoded {
        Self::decode_query(link.query().unwrap_or_default())
    }
}
