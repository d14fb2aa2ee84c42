//! Output post-processing per summary style

use crate::types::SummaryStyle;

/// Bullet markers stripped from pre-formatted lines, checked in this order
const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Lines shorter than this are dropped by the newline strategy
const MIN_LINE_LEN: usize = 4;

/// Sentences shorter than this are dropped by the sentence strategy
const MIN_SENTENCE_LEN: usize = 11;

/// Format the raw model output for the requested style
pub fn format_output(summary: &str, style: SummaryStyle) -> String {
    match style {
        SummaryStyle::Bullet => format_bullets(summary),
        SummaryStyle::Short | SummaryStyle::Medium => summary.to_string(),
    }
}

/// Rebuild a bullet list from unstructured text
///
/// Tries newline-separated items first, then sentences, and finally wraps
/// the whole summary in a single bullet.
pub fn format_bullets(summary: &str) -> String {
    let mut bullets = bullets_from_lines(summary);

    if bullets.is_empty() {
        bullets = bullets_from_sentences(summary);
    }

    if bullets.is_empty() {
        return format!("- {}", summary);
    }

    bullets.join("\n")
}

fn bullets_from_lines(summary: &str) -> Vec<String> {
    let lines: Vec<&str> = summary.split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    lines
        .into_iter()
        .map(|line| strip_markers(line.trim()).trim())
        .filter(|line| line.len() >= MIN_LINE_LEN)
        .map(|line| format!("- {}", line))
        .collect()
}

fn bullets_from_sentences(summary: &str) -> Vec<String> {
    summary
        .replace(';', ".")
        .split('.')
        .map(str::trim)
        .filter(|sentence| sentence.len() >= MIN_SENTENCE_LEN)
        .map(|sentence| format!("- {}", sentence))
        .collect()
}

fn strip_markers(line: &str) -> &str {
    BULLET_MARKERS
        .iter()
        .fold(line, |rest, marker| rest.strip_prefix(*marker).unwrap_or(rest))
}
