//! Download port

use std::io::Read;

use thiserror::Error;

/// Why a download could not start
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (DNS, connect, TLS, bad URL)
    #[error("request failed: {0}")]
    Request(String),

    /// Server answered with something other than 200
    #[error("status code: {0}")]
    Status(u16),
}

/// Performs HTTP GET requests
pub trait Fetcher {
    /// Request `url` and hand back the response body
    ///
    /// Only a 200 response yields a body; every other status is
    /// [`FetchError::Status`].
    fn fetch(&self, url: &str) -> Result<Box<dyn Read>, FetchError>;
}
