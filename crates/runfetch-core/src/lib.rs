pub mod fetcher;
pub mod request;
pub mod result;
pub mod select;
pub mod error;

// Re-exports
pub use error::{Error, Result};
pub use fetcher::ArtifactFetcher;
pub use request::FetchRequest;
pub use result::FetchResult;
