use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use textsum_common::config::TOKEN_ENV_VAR;
use textsum_common::{Result, SummarizerError};
use tracing::{debug, info};

use crate::llm_trait::InferenceBackend;
use crate::types::{ApiErrorBody, SummaryItem, SummaryRequest};

/// Default per-attempt timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HuggingFace Inference API client
#[derive(Debug, Clone)]
pub struct InferenceClient {
    api_url: String,
    client: Client,
}

impl InferenceClient {
    /// Create new inference client
    ///
    /// `timeout` covers connecting, sending and reading the full response.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_url = api_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizerError::transport(format!("Failed to create HTTP client: {}", e)))?;

        info!("Inference client initialized: {}", api_url);
        Ok(Self { api_url, client })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Single attempt to summarize
    pub async fn try_summarize(&self, request: &SummaryRequest, credential: &str) -> Result<String> {
        debug!(
            "Sending summarization request - Style: {}, Prompt length: {}",
            request.style(),
            request.prompt().len()
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(credential)
            .json(&request.payload())
            .send()
            .await
            .map_err(|e| SummarizerError::transport(format!("API request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SummarizerError::transport(format!("Failed to read response: {}", e)))?;

        if status != StatusCode::OK {
            return Err(classify_error(status, &body));
        }

        let items: Vec<SummaryItem> = serde_json::from_str(&body)
            .map_err(|e| SummarizerError::invalid_response(format!("Failed to parse response: {}", e)))?;

        match items.into_iter().next() {
            Some(item) if !item.summary_text.is_empty() => {
                debug!("Received summary - Length: {}", item.summary_text.len());
                Ok(item.summary_text)
            }
            _ => Err(SummarizerError::EmptyResult),
        }
    }
}

#[async_trait]
impl InferenceBackend for InferenceClient {
    async fn attempt(&self, request: &SummaryRequest, credential: &str) -> Result<String> {
        self.try_summarize(request, credential).await
    }
}

/// Map a non-200 response to an API error
///
/// Uses the `error` field of a JSON body when present, the raw body otherwise.
pub(crate) fn classify_error(status: StatusCode, body: &str) -> SummarizerError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => body.to_string(),
    };

    if status == StatusCode::UNAUTHORIZED {
        return SummarizerError::api(status.as_u16(), format!("{}\n\n{}", message, token_remediation()));
    }

    SummarizerError::api(status.as_u16(), message)
}

fn token_remediation() -> String {
    format!(
        "Please ensure your API token is valid:\n\
         1. Go to https://huggingface.co/settings/tokens\n\
         2. Create or copy your token\n\
         3. Set: {}=\"your_token_here\"",
        TOKEN_ENV_VAR
    )
}
