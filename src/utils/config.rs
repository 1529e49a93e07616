//! Application configuration

use crate::providers::{CustomProvider, EmbedContext, DEFAULT_HOST};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Host name of the page embedding the player (Twitch `parent`)
    pub host: String,

    /// Timeout for oEmbed requests (seconds)
    pub oembed_timeout_secs: u64,

    /// Providers consulted after the built-in ones
    pub custom_providers: Vec<CustomProvider>,

    /// oEmbed endpoint overrides keyed by provider key (e.g. a caching proxy)
    pub oembed_endpoints: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            oembed_timeout_secs: 5,
            custom_providers: Vec::new(),
            oembed_endpoints: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&raw)?;
        settings.sanitize()?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn embed_context(&self) -> EmbedContext {
        EmbedContext::new(self.host.clone())
    }

    /// Replace the embed host; blank falls back to the default, anything
    /// else must be a plain host name
    pub fn set_host(&mut self, host: &str) -> Result<()> {
        if host.trim().is_empty() {
            warn!("Empty host, using {}", DEFAULT_HOST);
            self.host = DEFAULT_HOST.to_string();
            return Ok(());
        }
        self.host = EmbedContext::parse(host)?.host;
        Ok(())
    }

    /// Enforce sane minimums
    fn sanitize(&mut self) -> Result<()> {
        let host = std::mem::take(&mut self.host);
        self.set_host(&host)?;
        if self.oembed_timeout_secs == 0 {
            warn!("oEmbed timeout of 0s in settings, using 1s");
            self.oembed_timeout_secs = 1;
        }
        Ok(())
    }
}
