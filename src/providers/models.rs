//! Data structures for video providers and detection results

use crate::providers::template::{EmbedContext, UrlTemplate};
use crate::utils::error::{Result, VidlinkError};
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

/// A video hosting service with URL-detection rules and URL builders.
///
/// `name` is a display label and is not unique (both Twitch entries are
/// called "Twitch"); `key` identifies the entry.
#[derive(Debug, Clone, Serialize)]
pub struct Provider {
    key: String,
    name: String,
    #[serde(serialize_with = "serialize_patterns")]
    patterns: Vec<Regex>,
    embed_url: UrlTemplate,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<UrlTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl Provider {
    /// Compile a provider from its pattern sources.
    ///
    /// Every pattern must compile and contain a capture group; group 1 is
    /// the video id.
    pub fn new<S: AsRef<str>>(
        key: impl Into<String>,
        name: impl Into<String>,
        patterns: &[S],
        embed_url: impl Into<UrlTemplate>,
    ) -> Result<Self> {
        let key = key.into();
        let embed_url = embed_url.into();

        if key.trim().is_empty() {
            return Err(VidlinkError::InvalidProvider {
                key,
                reason: "key must not be empty".to_string(),
            });
        }
        if patterns.is_empty() {
            return Err(VidlinkError::InvalidProvider {
                key,
                reason: "at least one pattern is required".to_string(),
            });
        }
        if !embed_url.has_id() {
            return Err(VidlinkError::InvalidProvider {
                key,
                reason: format!("embed URL '{}' has no {{id}} placeholder", embed_url),
            });
        }

        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern).map_err(|source| VidlinkError::InvalidPattern {
                key: key.clone(),
                source,
            })?;
            // captures_len counts the implicit whole-match group
            if regex.captures_len() < 2 {
                return Err(VidlinkError::MissingCaptureGroup {
                    key,
                    pattern: pattern.to_string(),
                });
            }
            compiled.push(regex);
        }

        Ok(Self {
            key,
            name: name.into(),
            patterns: compiled,
            embed_url,
            thumbnail_url: None,
            color: None,
        })
    }

    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<UrlTemplate>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn embed_url(&self) -> &UrlTemplate {
        &self.embed_url
    }

    pub fn thumbnail_url(&self) -> Option<&UrlTemplate> {
        self.thumbnail_url.as_ref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Video id captured by the first pattern that matches, in declaration order.
    ///
    /// A pattern whose group 1 did not participate or matched the empty
    /// string does not count as a match.
    pub fn capture<'t>(&self, input: &'t str) -> Option<&'t str> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .captures(input)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|id| !id.is_empty())
        })
    }

    /// Build the match value for an id captured by this provider
    pub fn build_match<'p>(&'p self, video_id: &str, context: &EmbedContext) -> VideoMatch<'p> {
        VideoMatch {
            provider: self,
            video_id: video_id.to_string(),
            embed_url: self.embed_url.render(video_id, context),
            thumbnail_url: self
                .thumbnail_url
                .as_ref()
                .map(|template| template.render(video_id, context)),
        }
    }
}

impl PartialEq for Provider {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Provider {}

fn serialize_patterns<S: Serializer>(patterns: &[Regex], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(patterns.iter().map(Regex::as_str))
}

/// Result of a successful detection. Derived per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoMatch<'p> {
    pub provider: &'p Provider,
    pub video_id: String,
    pub embed_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// A provider declared in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProvider {
    pub key: String,
    pub name: String,
    pub patterns: Vec<String>,
    pub embed_url: UrlTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<UrlTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CustomProvider {
    /// Compile into a registry entry
    pub fn compile(&self) -> Result<Provider> {
        let mut provider = Provider::new(
            self.key.clone(),
            self.name.clone(),
            self.patterns.as_slice(),
            self.embed_url.clone(),
        )?;
        if let Some(thumbnail) = &self.thumbnail_url {
            provider = provider.with_thumbnail(thumbnail.clone());
        }
        if let Some(color) = &self.color {
            provider = provider.with_color(color.clone());
        }
        Ok(provider)
    }
}
