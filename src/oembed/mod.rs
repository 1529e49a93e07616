pub mod fetcher;
pub mod models;
pub mod resolver;
pub mod traits;

pub use fetcher::OEmbedFetcher;
pub use models::{EmbedInfo, OEmbedData};
pub use resolver::EmbedResolver;
pub use traits::MetadataFetcher;
