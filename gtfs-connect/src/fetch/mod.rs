mod content_hash_cache;
mod content_source;
mod download_service;
mod fetch_error;

pub use content_hash_cache::ContentHashCache;
pub use content_source::{ContentSource, HttpContentSource};
pub use download_service::{DownloadService, GtfsZip};
pub use fetch_error::FetchError;
