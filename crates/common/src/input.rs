use crate::error::SummarizerError;
use std::path::Path;
use tracing::{debug, warn};

/// Read a text file for summarization
///
/// The content is trimmed and cut to at most `max_chars` characters.
/// Truncation is reported with a warning; empty files are rejected.
pub fn load_input(path: &Path, max_chars: usize) -> Result<String, SummarizerError> {
    if !path.exists() {
        return Err(SummarizerError::file_system(format!(
            "file does not exist: {}",
            path.display()
        )));
    }

    let data = std::fs::read_to_string(path)?;
    let content = data.trim();
    if content.is_empty() {
        return Err(SummarizerError::invalid_input("file is empty"));
    }

    debug!("Loaded {} ({} bytes)", path.display(), content.len());

    Ok(truncate_chars(content, max_chars))
}

/// Cut text to `max_chars` characters on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            warn!("Input truncated to {} characters", max_chars);
            text[..idx].to_string()
        }
        None => text.to_string(),
    }
}
