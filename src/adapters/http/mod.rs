//! HTTP adapter
//!
//! Implements `Fetcher` with a blocking `reqwest` client. No request
//! timeout is set: a server that never answers blocks the run.

use std::io::Read;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::core::ports::{FetchError, Fetcher};

/// User agent sent with every download
pub const USER_AGENT: &str = concat!("runifnew/", env!("CARGO_PKG_VERSION"));

/// Downloads over HTTP(S)
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    /// Create a fetcher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn client() -> Result<Client, FetchError> {
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Box<dyn Read>, FetchError> {
        let response = Self::client()?
            .get(url)
            .send()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        log::debug!(
            "GET {url} -> {status} (content-length: {:?})",
            response.content_length()
        );
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(Box::new(response))
    }
}
