//! URL templates used by provider embed and thumbnail builders

use crate::utils::error::{Result, VidlinkError};
use serde::{Deserialize, Serialize};
use std::fmt;

const ID_PLACEHOLDER: &str = "{id}";
const HOST_PLACEHOLDER: &str = "{host}";

/// Host name used when the caller does not say where the player is embedded
pub const DEFAULT_HOST: &str = "localhost";

/// Where an embed URL is going to be loaded.
///
/// Some providers (Twitch) refuse to play inside a frame unless the embedding
/// page's host name is passed as a `parent` query parameter, so the host is
/// an explicit input of every builder rather than ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedContext {
    pub host: String,
}

impl EmbedContext {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Context for a user-supplied host name.
    ///
    /// The host lands verbatim in a query string, so only DNS name
    /// characters are accepted.
    pub fn parse(host: &str) -> Result<Self> {
        let host = host.trim();
        if !is_valid_host(host) {
            return Err(VidlinkError::InvalidHost(host.to_string()));
        }
        Ok(Self::new(host))
    }
}

/// Non-empty, ASCII letters, digits, `.` and `-` only
pub fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
}

impl Default for EmbedContext {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

/// A URL with `{id}` and `{host}` placeholders.
///
/// Rendering is a pure function of the video id and the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the template has an `{id}` slot
    pub fn has_id(&self) -> bool {
        self.0.contains(ID_PLACEHOLDER)
    }

    /// True when rendering depends on the embedding host
    pub fn uses_host(&self) -> bool {
        self.0.contains(HOST_PLACEHOLDER)
    }

    /// Substitute the video id and host
    pub fn render(&self, video_id: &str, context: &EmbedContext) -> String {
        // The id goes in last so its text is never scanned for placeholders.
        let url = if self.uses_host() {
            self.0.replace(HOST_PLACEHOLDER, &context.host)
        } else {
            self.0.clone()
        };
        url.replace(ID_PLACEHOLDER, video_id)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UrlTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
