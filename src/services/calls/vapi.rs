use anyhow::Context;
use async_trait::async_trait;

use super::CallHistorySource;
use crate::models::UpstreamCall;

pub struct VapiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl VapiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CallHistorySource for VapiClient {
    async fn list_calls(&self) -> anyhow::Result<Vec<UpstreamCall>> {
        let calls = self
            .client
            .get(format!("{}/call", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .context("failed to call Vapi API")?
            .error_for_status()
            .context("Vapi API returned error")?
            .json::<Vec<UpstreamCall>>()
            .await
            .context("failed to parse Vapi call listing")?;

        Ok(calls)
    }
}
