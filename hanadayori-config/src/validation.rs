use crate::models::Config;

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Settings that load fine but deserve a second look.
pub fn collect_warnings(config: &Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if !config.dev_mode && config.cors.allows_any_origin() {
        warnings.push_with_hint(
            "CORS accepts any origin while DEV_MODE is false",
            "Set CORS_ALLOWED_ORIGINS to the origins that serve the card pages",
        );
    }

    let origin = &config.share.public_origin;
    if !config.dev_mode
        && origin.scheme() == "http"
        && !matches!(origin.host_str(), Some("localhost" | "127.0.0.1"))
    {
        warnings.push_with_hint(
            format!("PUBLIC_ORIGIN {origin} is not HTTPS"),
            "Share links will be handed out over plain HTTP",
        );
    }

    if config.pexels.base_url.scheme() == "http" {
        warnings.push(format!(
            "PEXELS_BASE_URL {} is plain HTTP and exposes the API key",
            config.pexels.base_url
        ));
    }

    warnings
}
