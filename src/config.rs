use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::json_ld::ACTIVITY_STREAMS_NS;

#[derive(Clone, Default, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decode: DecodeConfig,
    pub encode: EncodeConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Nested items deeper than this are dropped while decoding.
    pub max_depth: usize,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// `@context` written on outermost documents. Empty disables it.
    pub context_url: String,
    /// Add the security vocabulary to actor documents.
    pub security_context: bool,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Config> {
        toml::from_str(text).context("invalid vocabulary codec configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        Config::from_toml(&text)
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { max_depth: 32 }
    }
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            context_url: ACTIVITY_STREAMS_NS.to_string(),
            security_context: true,
        }
    }
}
