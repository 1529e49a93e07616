use crate::oembed::fetcher::OEmbedFetcher;
use crate::oembed::models::EmbedInfo;
use crate::oembed::traits::MetadataFetcher;
use crate::providers::{EmbedContext, ProviderRegistry, VideoMatch};
use crate::utils::config::Settings;
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The Embed Resolver
///
/// Detects the provider of a URL and routes it to the first fetcher that
/// supports the match. A fetch failure never surfaces to the caller: the
/// resolver falls back to what the match alone can tell.
pub struct EmbedResolver {
    registry: ProviderRegistry,
    context: EmbedContext,
    fetchers: Vec<Arc<dyn MetadataFetcher>>,
}

impl EmbedResolver {
    /// Create a resolver with the given registry, context and fetchers
    pub fn new(
        registry: ProviderRegistry,
        context: EmbedContext,
        fetchers: Vec<Arc<dyn MetadataFetcher>>,
    ) -> Self {
        Self {
            registry,
            context,
            fetchers,
        }
    }

    /// Resolver with the configured providers, host and HTTP timeout
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.oembed_timeout_secs))
            .user_agent(concat!("vidlink/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let registry = ProviderRegistry::with_custom(&settings.custom_providers)?;
        Ok(Self::new(
            registry,
            settings.embed_context(),
            OEmbedFetcher::builtin_with_overrides(&http, &settings.oembed_endpoints),
        ))
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn context(&self) -> &EmbedContext {
        &self.context
    }

    /// Find the fetcher for a match, if any
    fn find_fetcher(&self, matched: &VideoMatch<'_>) -> Option<&Arc<dyn MetadataFetcher>> {
        let fetcher = self.fetchers.iter().find(|f| f.supports(matched));
        match fetcher {
            Some(f) => debug!("Routing to fetcher: {}", f.id()),
            None => debug!("No fetcher for provider {}", matched.provider.key()),
        }
        fetcher
    }

    /// Resolve everything known about a URL
    pub async fn resolve(&self, url: &str) -> EmbedInfo {
        let Some(matched) = self.registry.detect(url, &self.context) else {
            debug!("No provider recognised {}", url);
            return EmbedInfo::unrecognized(url);
        };

        let local = EmbedInfo::from_match(url, &matched);
        let Some(fetcher) = self.find_fetcher(&matched) else {
            return local;
        };

        match fetcher.fetch(url, &matched).await {
            Ok(data) => local.merge(data),
            Err(e) => {
                info!(
                    "Fetcher {} failed: {}. Falling back to local match data",
                    fetcher.id(),
                    e
                );
                local
            }
        }
    }
}
