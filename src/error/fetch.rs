use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single probe. Recorded in the result, never fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("Failed to read response body from '{url}' after {bytes} bytes: {source}")]
    Body {
        url: String,
        bytes: u64,
        #[source]
        source: BoxError,
    },
}
