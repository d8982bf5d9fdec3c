use super::Fetcher;
use crate::config::RequestConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &RequestConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await?;
        Ok(html)
    }
}
