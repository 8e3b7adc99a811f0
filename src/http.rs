//! HTTP transport used by every provider client
//!
//! Clients only ever issue plain `GET` requests and read the body as text, so
//! the seam is a single async method. The reqwest implementation is used in
//! production; tests plug in canned responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::HttpConfig;
use crate::{Result, TravelAssistError};

/// Performs a `GET` request and returns the response body
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// `HttpTransport` backed by a shared `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from the HTTP section of the configuration
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder.build().map_err(|e| {
            TravelAssistError::config(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TravelAssistError::transport(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TravelAssistError::transport(format!(
                "Unexpected status {status} from {url}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TravelAssistError::transport(format!("Failed to read body: {e}")))
    }
}
