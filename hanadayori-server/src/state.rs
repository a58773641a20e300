use std::{fmt, sync::Arc};

use hanadayori_config::Config;
use hanadayori_core::{ImageProvider, LinkCodec, PexelsProvider};
use url::Url;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub images: Arc<dyn ImageProvider>,
    pub codec: LinkCodec,
    /// Base of every generated share link.
    pub view_url: Url,
}

impl AppState {
    pub fn new(config: Config, images: Arc<dyn ImageProvider>) -> Self {
        Self {
            codec: config.link_codec(),
            view_url: config.view_url(),
            config: Arc::new(config),
            images,
        }
    }

    /// State backed by the real Pexels client, holding the configured key.
    pub fn from_config(config: Config) -> Self {
        let provider = PexelsProvider::with_base_url(
            config.pexels.api_key.clone(),
            config.pexels.base_url.as_str(),
        );
        Self::new(config, Arc::new(provider))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.images.name())
            .field("view_url", &self.view_url.as_str())
            .finish_non_exhaustive()
    }
}
