//! Image Provider Gateway.
//!
//! Translates a search intent into photos from a third-party stock-photo
//! search API. Every failure collapses into [`FetchFailed`]; there is no
//! retry, backoff or caching here, the caller decides what to do next.

pub mod pexels;
pub mod query;

use std::fmt;

use async_trait::async_trait;
use hanadayori_model::{Orientation, SearchPage};
use tracing::warn;

use crate::error::FetchFailed;
use crate::flowers::{DEFAULT_QUERY, FlowerKind, pick_variety_term};

pub use pexels::PexelsProvider;
pub use query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE, SearchQuery};

/// Provider credential. Only ever held server-side; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Run one search and return the provider's JSON body untouched.
    async fn search_raw(
        &self,
        query: &SearchQuery,
    ) -> Result<serde_json::Value, FetchFailed>;

    /// Provider name, for logs.
    fn name(&self) -> &'static str;

    /// Run one search and decode the body into a [`SearchPage`].
    async fn search(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchPage, FetchFailed> {
        let body = self.search_raw(query).await?;
        serde_json::from_value(body).map_err(|err| {
            warn!(
                provider = self.name(),
                error = %err,
                "search response did not match the expected shape"
            );
            FetchFailed
        })
    }

    /// `search("flowers", page, per_page, portrait)`
    async fn fetch_default(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage, FetchFailed> {
        self.search(&SearchQuery::new(
            DEFAULT_QUERY,
            page,
            per_page,
            Orientation::Portrait,
        ))
        .await
    }

    /// Portrait search for a randomly chosen variety term. Two calls for the
    /// same page may hit different terms.
    async fn fetch_variety(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage, FetchFailed> {
        self.search(&variety_query(page, per_page)).await
    }

    /// Portrait search for one catalog kind, e.g. `"rose flowers"`.
    async fn search_flower(
        &self,
        kind: &FlowerKind,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage, FetchFailed> {
        self.search(&SearchQuery::new(
            kind.query(),
            page,
            per_page,
            Orientation::Portrait,
        ))
        .await
    }
}

/// Builds the query behind [`ImageProvider::fetch_variety`].
pub fn variety_query(page: u32, per_page: u32) -> SearchQuery {
    let term = pick_variety_term(&mut rand::rng());
    SearchQuery::new(term, page, per_page, Orientation::Portrait)
}
