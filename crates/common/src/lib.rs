pub mod config;
pub mod error;
pub mod input;
pub mod logger;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::SummarizerError;
pub use input::load_input;
pub type Result<T> = std::result::Result<T, SummarizerError>;
