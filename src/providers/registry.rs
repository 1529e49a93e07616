use crate::providers::builtin::builtin_providers;
use crate::providers::models::{CustomProvider, Provider, VideoMatch};
use crate::providers::template::EmbedContext;
use crate::utils::error::{Result, VidlinkError};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Built-in registry, compiled once per process
static BUILTIN: LazyLock<ProviderRegistry> = LazyLock::new(|| {
    // The built-in table is made of constant patterns known to compile.
    builtin_providers()
        .and_then(ProviderRegistry::new)
        .expect("built-in provider table is constant and always valid")
});

/// The Provider Registry
///
/// An ordered, read-only list of providers. Detection walks it front to back
/// and stops at the first pattern that captures a video id, so declaration
/// order is match priority.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Provider>,
}

impl ProviderRegistry {
    /// Create a registry from providers in priority order.
    ///
    /// Fails when two entries share a key.
    pub fn new(providers: Vec<Provider>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(providers.len());
        for provider in &providers {
            if !seen.insert(provider.key()) {
                return Err(VidlinkError::DuplicateProvider(provider.key().to_string()));
            }
        }
        Ok(Self { providers })
    }

    /// The process-wide built-in registry
    pub fn builtin() -> &'static ProviderRegistry {
        &BUILTIN
    }

    /// Built-in providers followed by the configured ones
    pub fn with_custom(custom: &[CustomProvider]) -> Result<Self> {
        let mut providers = Self::builtin().providers.clone();
        for entry in custom {
            debug!("Registering configured provider: {}", entry.key);
            providers.push(entry.compile()?);
        }
        Self::new(providers)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Look up an entry by its unique key
    pub fn get(&self, key: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.key() == key)
    }

    /// Find the provider and video id for an input string.
    ///
    /// Returns `None` when nothing matches; that is the common case for
    /// arbitrary user text and is not an error.
    pub fn detect(&self, input: &str, context: &EmbedContext) -> Option<VideoMatch<'_>> {
        for provider in &self.providers {
            if let Some(video_id) = provider.capture(input) {
                debug!("Matched provider {} with id {}", provider.key(), video_id);
                return Some(provider.build_match(video_id, context));
            }
        }
        trace!("No provider matched input");
        None
    }

    /// True iff [`detect`](Self::detect) finds a match
    pub fn is_video_url(&self, input: &str) -> bool {
        self.detect(input, &EmbedContext::default()).is_some()
    }
}

impl<'a> IntoIterator for &'a ProviderRegistry {
    type Item = &'a Provider;
    type IntoIter = std::slice::Iter<'a, Provider>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}

/// Detect a video link using the built-in registry
pub fn detect_video_provider(input: &str, context: &EmbedContext) -> Option<VideoMatch<'static>> {
    ProviderRegistry::builtin().detect(input, context)
}

/// True iff [`detect_video_provider`] finds a match
pub fn is_video_url(input: &str) -> bool {
    ProviderRegistry::builtin().is_video_url(input)
}
