use textsum_common::Result;
use tracing::{debug, info};

use crate::client::InferenceClient;
use crate::format::format_output;
use crate::llm_trait::InferenceBackend;
use crate::retry::{RetryController, RetryPolicy};
use crate::types::{SummaryRequest, SummaryStyle};

/// Summarizer: prompt, retrying inference, output formatting
pub struct Summarizer {
    backend: Box<dyn InferenceBackend>,
    retry: RetryController,
}

impl Summarizer {
    /// Create new summarizer over the HTTP inference client
    pub fn new(client: InferenceClient, policy: RetryPolicy) -> Self {
        Self::with_backend(client, policy)
    }

    /// Create summarizer over any backend
    pub fn with_backend(backend: impl InferenceBackend + 'static, policy: RetryPolicy) -> Self {
        Self {
            backend: Box::new(backend),
            retry: RetryController::new(policy),
        }
    }

    /// Summarize text in the requested style
    pub async fn summarize(&self, text: &str, style: SummaryStyle, credential: &str) -> Result<String> {
        info!("Starting summarization - Style: {}, Text length: {} chars", style, text.len());

        let request = SummaryRequest::new(text, style);
        let bounds = request.bounds();
        debug!(
            "Length bounds - min: {}, max: {}",
            bounds.min_tokens, bounds.max_tokens
        );

        let raw = self.retry.run(self.backend.as_ref(), &request, credential).await?;

        Ok(format_output(&raw, style))
    }
}
