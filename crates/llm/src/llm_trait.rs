use textsum_common::Result;
use crate::types::SummaryRequest;
use async_trait::async_trait;

/// One request/response cycle against a summarization endpoint
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Run a single attempt and return the raw summary text
    async fn attempt(&self, request: &SummaryRequest, credential: &str) -> Result<String>;
}
