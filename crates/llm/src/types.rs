use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use textsum_common::SummarizerError;

use crate::prompts::build_prompt;

/// Requested summary style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// 1-2 sentences
    Short,
    /// One paragraph
    Medium,
    /// List of key points
    Bullet,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [Self::Short, Self::Medium, Self::Bullet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Bullet => "bullet",
        }
    }
}

impl Default for SummaryStyle {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = SummarizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "bullet" => Ok(Self::Bullet),
            _ => Err(SummarizerError::invalid_input(format!(
                "Invalid summary type '{}'. Must be: short, medium, or bullet",
                s
            ))),
        }
    }
}

/// Token length bounds sent with every attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_tokens: u32,
    pub max_tokens: u32,
}

impl LengthBounds {
    pub const fn new(min_tokens: u32, max_tokens: u32) -> Self {
        Self {
            min_tokens,
            max_tokens,
        }
    }
}

/// One summarization request, built once and shared by all attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    text: String,
    style: SummaryStyle,
    prompt: String,
    bounds: LengthBounds,
}

impl SummaryRequest {
    /// Create new request, deriving prompt and bounds from the style
    pub fn new(text: impl Into<String>, style: SummaryStyle) -> Self {
        let text = text.into();
        let (prompt, bounds) = build_prompt(&text, style);
        Self {
            text,
            style,
            prompt,
            bounds,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> SummaryStyle {
        self.style
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Wire payload for the inference endpoint
    pub fn payload(&self) -> InferenceRequest<'_> {
        InferenceRequest {
            inputs: &self.prompt,
            parameters: InferenceParameters {
                max_length: self.bounds.max_tokens,
                min_length: self.bounds.min_tokens,
            },
        }
    }
}

/// Inference API request body
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    /// Prompt text
    pub inputs: &'a str,

    /// Generation parameters
    pub parameters: InferenceParameters,
}

/// Generation parameters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InferenceParameters {
    /// Maximum summary length in tokens
    pub max_length: u32,

    /// Minimum summary length in tokens
    pub min_length: u32,
}

/// One element of the success response array
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryItem {
    #[serde(default)]
    pub summary_text: String,
}

/// Error response body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
