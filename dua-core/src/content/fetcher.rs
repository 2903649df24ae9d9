//! Content fetcher for downloading the remote dataset
//!
//! This module provides HTTP-based fetching with:
//! - Size limits
//! - Proxy support
//! - Timeout configuration

use thiserror::Error;

use super::config::ContentConfig;

#[cfg(feature = "content-updates")]
use reqwest::Client;

/// Fetches the dataset document from a remote server
#[cfg(feature = "content-updates")]
pub struct ContentFetcher {
    client: Client,
    max_content_size: u64,
}

#[cfg(feature = "content-updates")]
impl ContentFetcher {
    /// Create a new content fetcher from config
    pub fn new(config: &ContentConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "DuaCompanion/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ));

        // Only the configured proxy is used; environment proxies are ignored.
        builder = match &config.proxy_url {
            Some(proxy_url) => builder.proxy(reqwest::Proxy::all(proxy_url)?),
            None => builder.no_proxy(),
        };

        Ok(Self {
            client: builder.build()?,
            max_content_size: config.max_content_size,
        })
    }

    /// Download the dataset document at `url`.
    ///
    /// The body is returned unparsed; validation happens in the store.
    pub async fn fetch_dataset(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if url.trim().is_empty() {
            return Err(FetchError::NoUrl);
        }

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpError(response.status().as_u16()));
        }

        // Check content length before downloading
        if let Some(len) = response.content_length() {
            if len > self.max_content_size {
                return Err(FetchError::TooLarge {
                    size: len,
                    max: self.max_content_size,
                });
            }
        }

        let data = response.bytes().await?.to_vec();

        // Verify size after download (in case content-length was missing)
        if data.len() as u64 > self.max_content_size {
            return Err(FetchError::TooLarge {
                size: data.len() as u64,
                max: self.max_content_size,
            });
        }

        Ok(data)
    }
}

/// Stub fetcher when content-updates feature is not enabled
#[cfg(not(feature = "content-updates"))]
pub struct ContentFetcher {
    _private: (),
}

#[cfg(not(feature = "content-updates"))]
impl ContentFetcher {
    /// Create a new content fetcher (stub - always fails)
    pub fn new(_config: &ContentConfig) -> Result<Self, FetchError> {
        Err(FetchError::FeatureDisabled)
    }
}

/// Errors that can occur during content fetching
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network/request error
    #[cfg(feature = "content-updates")]
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Content too large
    #[error("Content too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// No update URL was given or configured
    #[error("No update URL configured")]
    NoUrl,

    /// Content updates feature is not enabled
    #[error("Content updates feature is not enabled")]
    FeatureDisabled,
}
