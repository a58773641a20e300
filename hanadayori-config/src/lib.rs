//! Configuration for the Hanadayori server.
//!
//! Settings come from an optional `.env` file, an optional TOML file and the
//! process environment, in increasing priority. The Pexels API key is the
//! only required value.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions, compose,
    read_file_config,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    Config, ConfigMetadata, CorsConfig, PexelsConfig, ServerConfig, ShareConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
