/// textsum error types
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    /// Connection, timeout or body read failure (no HTTP status)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-200 response from the inference endpoint
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP 200 without usable summary text
    #[error("no summary generated by the API")]
    EmptyResult,

    /// HTTP 200 with a body that is not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Retry budget spent on retryable failures
    #[error("failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        source: Box<SummarizerError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("File system error: {0}")]
    FileSystem(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SummarizerError {
    /// Create transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Create API error
    pub fn api<S: Into<String>>(status: u16, msg: S) -> Self {
        Self::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create invalid response error
    pub fn invalid_response<S: Into<String>>(msg: S) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create file system error
    pub fn file_system<S: Into<String>>(msg: S) -> Self {
        Self::FileSystem(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// HTTP status carried by the failure, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Exhausted { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Whether another attempt may succeed: rate limiting (429) or server errors (5xx)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }
}
