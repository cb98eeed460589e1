use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::fmt::Debug;

use crate::error::{Result, WxError};

/// Raw HTTP GET capability used by the geocoder and the forecast reader.
#[async_trait]
pub trait Fetcher: Send + Sync + Debug {
    /// Issue a single GET and return the full response body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Fetcher`] backed by `reqwest`: no custom headers, no timeout override, no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");

        let res = self.http.get(url).send().await.map_err(|source| WxError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = res.status();
        if !status.is_success() {
            return Err(WxError::HttpStatus { url: url.to_string(), status });
        }

        let body = res.bytes().await.map_err(|source| WxError::Transport {
            url: url.to_string(),
            source,
        })?;

        debug!("{status} from {url}, {} bytes", body.len());
        Ok(body.to_vec())
    }
}
