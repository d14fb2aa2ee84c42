//! Prompt templates and length bounds per summary style

use crate::types::{LengthBounds, SummaryStyle};

/// Instruction prefix and token bounds for one style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub instruction: Option<&'static str>,
    pub bounds: LengthBounds,
}

impl StyleSpec {
    /// Used for style names that match no known style
    pub const FALLBACK: StyleSpec = StyleSpec {
        instruction: None,
        bounds: LengthBounds::new(20, 100),
    };

    /// Table row for a style
    pub const fn for_style(style: SummaryStyle) -> StyleSpec {
        match style {
            SummaryStyle::Short => StyleSpec {
                instruction: Some("Summarize this text in 1-2 concise sentences:"),
                bounds: LengthBounds::new(10, 50),
            },
            SummaryStyle::Medium => StyleSpec {
                instruction: Some("Provide a comprehensive paragraph summary of this text:"),
                bounds: LengthBounds::new(50, 150),
            },
            SummaryStyle::Bullet => StyleSpec {
                instruction: Some("Summarize this text as a list of key points:"),
                bounds: LengthBounds::new(30, 200),
            },
        }
    }

    /// Table row for a raw style name, never failing
    pub fn for_name(name: &str) -> StyleSpec {
        name.parse()
            .map(Self::for_style)
            .unwrap_or(Self::FALLBACK)
    }

    /// Apply the instruction prefix to the text
    pub fn prompt(&self, text: &str) -> String {
        match self.instruction {
            Some(instruction) => format!("{}\n\n{}", instruction, text),
            None => text.to_string(),
        }
    }
}

/// Prompt and bounds for a style
pub fn build_prompt(text: &str, style: SummaryStyle) -> (String, LengthBounds) {
    let spec = StyleSpec::for_style(style);
    (spec.prompt(text), spec.bounds)
}

/// Prompt and bounds for a raw style name; unknown names pass the text through
pub fn build_prompt_raw(text: &str, style_name: &str) -> (String, LengthBounds) {
    let spec = StyleSpec::for_name(style_name);
    (spec.prompt(text), spec.bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_table() {
        let expected = [
            (SummaryStyle::Short, 10, 50),
            (SummaryStyle::Medium, 50, 150),
            (SummaryStyle::Bullet, 30, 200),
        ];
        for (style, min, max) in expected {
            let (_, bounds) = build_prompt("text", style);
            assert_eq!(bounds, LengthBounds::new(min, max), "{style}");
        }
    }

    #[test]
    fn test_prompt_prefixes() {
        let (prompt, _) = build_prompt("Body", SummaryStyle::Short);
        assert_eq!(prompt, "Summarize this text in 1-2 concise sentences:\n\nBody");

        let (prompt, _) = build_prompt("Body", SummaryStyle::Medium);
        assert_eq!(
            prompt,
            "Provide a comprehensive paragraph summary of this text:\n\nBody"
        );

        let (prompt, _) = build_prompt("Body", SummaryStyle::Bullet);
        assert_eq!(prompt, "Summarize this text as a list of key points:\n\nBody");
    }

    #[test]
    fn test_unknown_style_falls_back() {
        let (prompt, bounds) = build_prompt_raw("Body", "haiku");
        assert_eq!(prompt, "Body");
        assert_eq!(bounds, LengthBounds::new(20, 100));
    }

    #[test]
    fn test_raw_known_style() {
        assert_eq!(
            build_prompt_raw("Body", "bullet"),
            build_prompt("Body", SummaryStyle::Bullet)
        );
    }
}
