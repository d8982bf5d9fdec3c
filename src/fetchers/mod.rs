use crate::error::FetchError;
use async_trait::async_trait;

mod rate_limited;
mod request;

pub use rate_limited::RateLimitedFetcher;
pub use request::RequestFetcher;

/// Retrieves the markup behind a URL.
///
/// A single attempt per call: callers decide whether to skip or abort on failure.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
