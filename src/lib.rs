//! vidlink library
//!
//! Recognises links to videos on known hosting providers and turns them into
//! embed and thumbnail URLs.

pub mod oembed;
pub mod providers;
pub mod utils;

// Re-export main types for easier use
pub use oembed::{EmbedInfo, EmbedResolver, MetadataFetcher, OEmbedFetcher};
pub use providers::{
    detect_video_provider, is_video_url, CustomProvider, EmbedContext, Provider, ProviderRegistry,
    UrlTemplate, VideoMatch,
};
pub use utils::{Settings, VidlinkError};
