use crate::oembed::models::OEmbedData;
use crate::providers::VideoMatch;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of metadata for a detected video
///
/// Implementations isolate the resolver from how metadata is obtained
/// (public oEmbed endpoint, a provider API, a cache).
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Returns a unique identifier for this fetcher (e.g., "oembed-youtube")
    fn id(&self) -> &str;

    /// Checks if this fetcher can describe the given match
    fn supports(&self, matched: &VideoMatch<'_>) -> bool;

    /// Fetch metadata for the original URL
    async fn fetch(&self, url: &str, matched: &VideoMatch<'_>) -> Result<OEmbedData>;
}
