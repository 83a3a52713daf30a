//! Configuration for the feed client

use crate::error::{FeedError, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Where the feed API lives. Endpoint paths are joined onto `api_base`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub api_base: Url,
}

impl FeedConfig {
    pub fn new(api_base: &str) -> Result<Self> {
        let api_base = Url::parse(api_base)?;
        if api_base.cannot_be_a_base() {
            return Err(FeedError::Config(format!(
                "{api_base} cannot be used as a base URL"
            )));
        }
        Ok(Self { api_base })
    }

    /// Build the config for a page served from `origin`, e.g. the value of
    /// `window.location.origin`.
    pub fn from_origin(origin: &str) -> Result<Self> {
        Self::new(origin)
    }

    /// Load configuration from environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_url =
            std::env::var("POSTFEED_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&api_url)
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_base.join(path)?)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
        }
    }
}
