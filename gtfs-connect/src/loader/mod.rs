mod feed;
mod loader_error;
mod loader_ops;

pub use feed::GtfsFeed;
pub use loader_error::LoaderError;
pub use loader_ops::{load, read_records};
