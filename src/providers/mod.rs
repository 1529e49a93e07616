pub mod builtin;
pub mod models;
pub mod registry;
pub mod template;

pub use models::{CustomProvider, Provider, VideoMatch};
pub use registry::{detect_video_provider, is_video_url, ProviderRegistry};
pub use template::{is_valid_host, EmbedContext, UrlTemplate, DEFAULT_HOST};
