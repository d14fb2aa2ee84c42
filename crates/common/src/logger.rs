use crate::error::SummarizerError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console logging
///
/// Log records go to stderr so stdout only carries the summary.
/// `RUST_LOG` takes precedence over `log_level`.
///
/// # Arguments
/// * `log_level` - Log level (trace, debug, info, warn, error)
pub fn setup_console_logging(log_level: &str) -> Result<(), SummarizerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(parse_log_level(log_level).as_str()));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| SummarizerError::config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("Console logging initialized: level={}", log_level);

    Ok(())
}

/// Parse string to tracing Level
pub fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to WARN", level);
            Level::WARN
        }
    }
}
