//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use halawah_client::config::Variant;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENT_PATH: &str = "public/content.json";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    #[error("unknown SITE_VARIANT: {0:?} (expected `extended` or `simplified`)")]
    UnknownVariant(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub variant: Variant,
    pub content_path: PathBuf,
}

impl SiteConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_VARIANT`: `extended` (default) or `simplified`
    /// - `CONTENT_PATH`: review/FAQ payload file, default `public/content.json`
    ///
    /// Blank values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let variant = match get("SITE_VARIANT") {
            Some(raw) => Variant::parse(&raw).ok_or(ConfigError::UnknownVariant(raw))?,
            None => Variant::default(),
        };
        let content_path = get("CONTENT_PATH").map_or_else(|| PathBuf::from(DEFAULT_CONTENT_PATH), PathBuf::from);

        Ok(Self { port, variant, content_path })
    }
}
