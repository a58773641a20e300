use std::fmt;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};

use super::{ApiKey, ImageProvider, SearchQuery};
use crate::error::FetchFailed;

pub const PEXELS_API_BASE: &str = "https://api.pexels.com/v1";

/// Pexels photo search client. The credential is attached to every request
/// as the `Authorization` header and never leaves this type.
pub struct PexelsProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl fmt::Debug for PexelsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PexelsProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish()
    }
}

impl PexelsProvider {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_base_url(api_key, PEXELS_API_BASE)
    }

    /// Point the client at another deployment of the same API (tests use a
    /// local stub).
    pub fn with_base_url(api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, base_url)
    }

    pub fn with_client(
        http: reqwest::Client,
        api_key: ApiKey,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl ImageProvider for PexelsProvider {
    async fn search_raw(
        &self,
        query: &SearchQuery,
    ) -> Result<serde_json::Value, FetchFailed> {
        debug!(
            query = %query.query,
            page = query.page,
            per_page = query.per_page,
            orientation = %query.orientation,
            "searching pexels"
        );

        let response = self
            .http
            .get(self.search_url())
            .header(AUTHORIZATION, self.api_key.expose())
            .query(query)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "pexels request failed");
                FetchFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            // 401, 429 and 5xx all surface as the same FetchFailed.
            warn!(status = status.as_u16(), "pexels rejected search");
            return Err(FetchFailed);
        }

        response.json::<serde_json::Value>().await.map_err(|err| {
            warn!(error = %err, "pexels returned an unreadable body");
            FetchFailed
        })
    }

    fn name(&self) -> &'static str {
        "pexels"
    }
}
