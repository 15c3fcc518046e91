pub mod vapi;

use async_trait::async_trait;

use crate::models::UpstreamCall;

#[async_trait]
pub trait CallHistorySource: Send + Sync {
    async fn list_calls(&self) -> anyhow::Result<Vec<UpstreamCall>>;
}
