use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;
use url::Url;

use hanadayori_core::ApiKey;
use hanadayori_core::providers::pexels::PEXELS_API_BASE;
use hanadayori_core::share::{DEFAULT_MAX_LINK_LEN, MIN_LINK_LEN};

use crate::models::{
    Config, ConfigMetadata, CorsConfig, PexelsConfig, ServerConfig, ShareConfig,
    sources::{EnvConfig, FileConfig, FilePexelsConfig},
};
use crate::validation::{self, ConfigWarnings};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_ORIGIN: &str = "http://localhost:3000";

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("hanadayori.toml"),
        PathBuf::from("config/hanadayori.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// `.env` first, then the TOML file, then the process environment on
    /// top of both.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let dotenv = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
        let env_file_loaded = match dotenv {
            Ok(()) => true,
            Err(dotenvy::Error::Io(_)) => false,
            Err(err) => return Err(err.into()),
        };

        let env_config = EnvConfig::gather();
        let (file_config, config_path) = self.load_file_config(&env_config)?;

        compose(
            file_config,
            env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

/// Parse one TOML configuration file.
pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge file and environment values into a validated [`Config`].
///
/// Environment values win over file values; defaults fill the rest.
pub fn compose(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<ConfigLoad, ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();
    if metadata.config_path.is_none() {
        warnings.push_with_hint(
            "No hanadayori.toml detected; using environment variables only",
            "Create hanadayori.toml or pass --config to use a file",
        );
    }

    let FileConfig {
        server: file_server,
        pexels: file_pexels,
        share: file_share,
        cors: file_cors,
        dev_mode: file_dev_mode,
    } = file_config.unwrap_or_default();

    let server = ServerConfig {
        host: env
            .server_host
            .clone()
            .filter(|host| !host.trim().is_empty())
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
    };

    let api_key = resolve_api_key(&env, &file_pexels)?;
    let base_url = parse_http_url(
        "PEXELS_BASE_URL",
        env.pexels_base_url
            .clone()
            .or(file_pexels.base_url)
            .as_deref()
            .unwrap_or(PEXELS_API_BASE),
    )?;

    let public_origin = parse_http_url(
        "PUBLIC_ORIGIN",
        env.public_origin
            .clone()
            .or(file_share.public_origin)
            .as_deref()
            .unwrap_or(DEFAULT_PUBLIC_ORIGIN),
    )?;
    let max_link_len = env
        .share_max_link_len
        .or(file_share.max_link_len)
        .unwrap_or(DEFAULT_MAX_LINK_LEN);
    if max_link_len < MIN_LINK_LEN {
        return Err(ConfigLoadError::LinkLimitTooSmall {
            value: max_link_len,
            min: MIN_LINK_LEN,
        });
    }

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .clone()
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };

    let config = Config {
        server,
        pexels: PexelsConfig { api_key, base_url },
        share: ShareConfig {
            public_origin,
            max_link_len,
        },
        cors,
        dev_mode: env.dev_mode.or(file_dev_mode).unwrap_or(false),
        metadata,
    };

    warnings.extend(validation::collect_warnings(&config));
    Ok(ConfigLoad { config, warnings })
}

fn resolve_api_key(
    env: &EnvConfig,
    file_pexels: &FilePexelsConfig,
) -> Result<ApiKey, ConfigLoadError> {
    if let Some(key) = non_blank(env.pexels_api_key.as_deref()) {
        return Ok(ApiKey::new(key));
    }
    if let Some(path) = env.pexels_api_key_file.as_ref()
        && let Some(key) = read_secret_file(path)?
    {
        return Ok(ApiKey::new(key));
    }
    if let Some(key) = non_blank(file_pexels.api_key.as_deref()) {
        return Ok(ApiKey::new(key));
    }
    if let Some(path) = file_pexels.api_key_file.as_ref()
        && let Some(key) = read_secret_file(path)?
    {
        return Ok(ApiKey::new(key));
    }
    Err(ConfigLoadError::MissingApiKey)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn read_secret_file(path: &Path) -> Result<Option<String>, ConfigLoadError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(non_blank(Some(&contents)).map(str::to_string)),
        Err(source) => Err(ConfigLoadError::SecretFileIo {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_http_url(
    field: &'static str,
    raw: &str,
) -> Result<Url, ConfigLoadError> {
    let url = match Url::parse(raw.trim()) {
        Ok(url) => url,
        Err(source) => {
            return Err(ConfigLoadError::InvalidUrl {
                field,
                value: raw.to_string(),
                source,
            });
        }
    };
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigLoadError::UnsupportedScheme {
            field,
            value: raw.to_string(),
        });
    }
    Ok(url)
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(
        "Pexels API key not configured; set PEXELS_API_KEY or PEXELS_API_KEY_FILE"
    )]
    MissingApiKey,
    #[error("failed to read secret file {path}")]
    SecretFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{field} must be an absolute http(s) URL: {value}")]
    UnsupportedScheme { field: &'static str, value: String },
    #[error("SHARE_MAX_LINK_LEN is {value}; the minimum is {min}")]
    LinkLimitTooSmall { value: usize, min: usize },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
