//! TOML configuration for the data feed and fetch cache.
//!
//! Every key is optional; an absent file section falls back to defaults so
//! the binary runs with no config at all.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub alpaca: AlpacaConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlpacaConfig {
    /// Alternate bars endpoint, e.g. a local stub while testing.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Cache directory; defaults to a subfolder of the OS temp dir.
    pub dir: Option<PathBuf>,
    /// Entry lifetime in seconds; defaults to one hour.
    pub ttl_secs: Option<u64>,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            ttl_secs: None,
            enabled: true,
        }
    }
}

fn enabled_default() -> bool {
    true
}

impl FeedConfig {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| Error::Config(format!("{}: {err}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let config: FeedConfig = toml::from_str(
            r#"
            [alpaca]
            base_url = "http://localhost:8080/bars"

            [cache]
            dir = "/var/cache/pivot_analyzer"
            ttl_secs = 600
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(
            config.alpaca.base_url.as_deref(),
            Some("http://localhost:8080/bars")
        );
        assert_eq!(
            config.cache.dir.as_deref(),
            Some(Path::new("/var/cache/pivot_analyzer"))
        );
        assert_eq!(config.cache.ttl_secs, Some(600));
        assert!(!config.cache.enabled);
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: FeedConfig = toml::from_str("").unwrap();
        assert!(config.alpaca.base_url.is_none());
        assert!(config.cache.dir.is_none());
        assert!(config.cache.ttl_secs.is_none());
        assert!(config.cache.enabled);
    }
}
