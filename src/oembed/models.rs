//! Data structures for oEmbed metadata

use crate::providers::VideoMatch;
use serde::{Deserialize, Serialize};

/// Subset of an oEmbed response we care about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OEmbedData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
}

/// Everything known about a link, suitable for rendering a preview card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedInfo {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

impl EmbedInfo {
    /// Info for a URL no provider recognised
    pub fn unrecognized(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Info derived from the match alone, without a network call
    pub fn from_match(url: impl Into<String>, matched: &VideoMatch<'_>) -> Self {
        Self {
            url: url.into(),
            thumbnail_url: matched.thumbnail_url.clone(),
            provider_name: Some(matched.provider.name().to_string()),
            video_id: Some(matched.video_id.clone()),
            embed_url: Some(matched.embed_url.clone()),
            ..Default::default()
        }
    }

    /// Fill in fetched metadata.
    ///
    /// The locally derived thumbnail is kept when there is one; the provider
    /// name always comes from the registry entry.
    pub fn merge(mut self, data: OEmbedData) -> Self {
        self.title = data.title;
        self.author_name = data.author_name;
        self.html = data.html;
        if self.thumbnail_url.is_none() {
            self.thumbnail_url = data.thumbnail_url;
        }
        self
    }

    pub fn is_video(&self) -> bool {
        self.embed_url.is_some()
    }
}
