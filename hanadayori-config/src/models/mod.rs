pub mod sources;

use std::path::PathBuf;

use hanadayori_core::api::routes::pages;
use hanadayori_core::{ApiKey, LinkCodec};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub pexels: PexelsConfig,
    pub share: ShareConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Viewer page that share links point at: `<public_origin>/view`.
    ///
    /// A path on the public origin is kept as a prefix, so an app mounted
    /// at `https://example.com/cards/` links to `/cards/view`.
    pub fn view_url(&self) -> Url {
        let mut url = self.share.public_origin.clone();
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}{}", pages::VIEW));
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    pub fn link_codec(&self) -> LinkCodec {
        LinkCodec::new(self.share.max_link_len)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct PexelsConfig {
    pub api_key: ApiKey,
    pub base_url: Url,
}

#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub public_origin: Url,
    /// Ceiling on a generated link, in bytes.
    pub max_link_len: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
            || self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origin(origin: &str) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8080,
            },
            pexels: PexelsConfig {
                api_key: ApiKey::new("k"),
                base_url: Url::parse("https://api.pexels.com/v1").expect("url"),
            },
            share: ShareConfig {
                public_origin: Url::parse(origin).expect("url"),
                max_link_len: 4096,
            },
            cors: CorsConfig::default(),
            dev_mode: false,
            metadata: ConfigMetadata::default(),
        }
    }

    #[test]
    fn view_url_appends_view_to_the_origin() {
        let config = config_with_origin("https://hana.example");
        assert_eq!(config.view_url().as_str(), "https://hana.example/view");

        let config = config_with_origin("https://hana.example/cards/?x=1#top");
        assert_eq!(
            config.view_url().as_str(),
            "https://hana.example/cards/view"
        );
    }

    #[test]
    fn codec_and_bind_address_follow_settings() {
        let config = config_with_origin("http://localhost:3000");
        assert_eq!(config.link_codec().max_len(), 4096);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn empty_or_wildcard_origins_allow_any() {
        let mut cors = CorsConfig::default();
        assert!(cors.allows_any_origin());
        cors.allowed_origins = vec!["https://hana.example".into()];
        assert!(!cors.allows_any_origin());
        cors.allowed_origins.push("*".into());
        assert!(cors.allows_any_origin());
    }
}
