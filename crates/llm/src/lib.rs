//! textsum inference pipeline
//!
//! HuggingFace Inference API client, retry control and summary formatting

mod client;
mod format;
mod llm_trait;
mod prompts;
mod retry;
mod summarize;
mod types;

pub use client::{InferenceClient, DEFAULT_TIMEOUT};
pub use format::{format_bullets, format_output};
pub use llm_trait::InferenceBackend;
pub use prompts::{build_prompt, build_prompt_raw, StyleSpec};
pub use retry::{RetryController, RetryPolicy};
pub use summarize::Summarizer;
pub use types::{
    ApiErrorBody, InferenceParameters, InferenceRequest, LengthBounds, SummaryItem,
    SummaryRequest, SummaryStyle,
};
