use crate::error::SummarizerError;
use serde::{Deserialize, Serialize};

/// HuggingFace Inference API endpoint for facebook/bart-large-cnn
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "HUGGINGFACE_API_TOKEN";

/// textsum application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HuggingFace API token
    #[serde(skip_serializing)]
    pub api_token: Option<String>,

    /// Inference endpoint URL
    pub api_url: String,

    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,

    /// Total attempts per summarization
    pub max_retries: u32,

    /// Delay before the first retry, in seconds
    pub retry_delay_secs: u64,

    /// Input character budget
    pub max_input_chars: usize,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
            retry_delay_secs: 2,
            max_input_chars: 1024,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SummarizerError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            api_token: std::env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|token| !token.trim().is_empty()),
            api_url: std::env::var("TEXTSUM_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: Self::get_env_parsed("TEXTSUM_TIMEOUT_SECS")?
                .unwrap_or(defaults.timeout_secs),
            max_retries: Self::get_env_parsed("TEXTSUM_MAX_RETRIES")?
                .unwrap_or(defaults.max_retries),
            retry_delay_secs: Self::get_env_parsed("TEXTSUM_RETRY_DELAY_SECS")?
                .unwrap_or(defaults.retry_delay_secs),
            max_input_chars: Self::get_env_parsed("TEXTSUM_MAX_INPUT_CHARS")?
                .unwrap_or(defaults.max_input_chars),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Parse a numeric environment variable, `None` when unset
    fn get_env_parsed<T: std::str::FromStr>(key: &str) -> Result<Option<T>, SummarizerError> {
        match std::env::var(key) {
            Ok(value) => value.trim().parse().map(Some).map_err(|_| {
                SummarizerError::config(format!("{} must be a number, got '{}'", key, value))
            }),
            Err(_) => Ok(None),
        }
    }

    /// API token, or setup instructions when it is missing
    pub fn require_token(&self) -> Result<&str, SummarizerError> {
        self.api_token
            .as_deref()
            .ok_or_else(|| SummarizerError::config(token_setup_instructions()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SummarizerError> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(SummarizerError::config(
                "API URL must start with http:// or https://",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(SummarizerError::config("Timeout cannot be 0"));
        }

        if self.max_retries == 0 {
            return Err(SummarizerError::config("Max retries must be at least 1"));
        }

        if self.max_input_chars == 0 {
            return Err(SummarizerError::config("Max input chars cannot be 0"));
        }

        Ok(())
    }
}

/// Instructions printed when the API token is not configured
pub fn token_setup_instructions() -> String {
    format!(
        "HuggingFace API token not found\n\n\
         To use this tool you need a free HuggingFace token:\n\
         1. Go to: https://huggingface.co/settings/tokens\n\
         2. Create a new token (free account)\n\
         3. Set the environment variable:\n\n\
         \x20  PowerShell: $env:{var} = 'your_token_here'\n\
         \x20  CMD:        set {var}=your_token_here\n\
         \x20  Linux/Mac:  export {var}=your_token_here",
        var = TOKEN_ENV_VAR
    )
}
