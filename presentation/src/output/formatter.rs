//! Plain-text rendering of a combined answer

use duet_domain::{DispatchMetadata, DispatchResult};

/// Width of the divider between sections
pub const DIVIDER_WIDTH: usize = 60;

/// Formats dispatch results as the single text block returned to MCP clients
pub struct TextFormatter;

impl TextFormatter {
    /// One labeled section per backend in configured order, then metadata
    pub fn format(result: &DispatchResult) -> String {
        let mut sections: Vec<String> = result
            .responses
            .iter()
            .map(|response| {
                format!(
                    "=== {} ({}) ===\n{}",
                    response.backend.label(),
                    response.model(),
                    response.content
                )
            })
            .collect();
        sections.push(Self::metadata(&result.metadata));

        sections.join(&format!("\n\n{}\n\n", Self::divider()))
    }

    pub fn divider() -> String {
        "-".repeat(DIVIDER_WIDTH)
    }

    fn metadata(metadata: &DispatchMetadata) -> String {
        let models = metadata
            .models()
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "=== Metadata ===\nTimestamp: {}\nModels: {}\nSystem prompt: {}",
            metadata.timestamp, models, metadata.system_prompt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_domain::{Backend, ModelResponse};

    fn result() -> DispatchResult {
        let a = Backend::new("model_a", "anthropic/claude-sonnet-4");
        let b = Backend::new("model_b", "openai/gpt-4o");
        DispatchResult::new(
            vec![
                ModelResponse::new(a.clone(), "Quicksort picks a pivot."),
                ModelResponse::new(b.clone(), "Partition, then recurse."),
            ],
            DispatchMetadata::new("2026-10-18T09:30:00.123Z", vec![a, b], "be brief"),
        )
    }

    #[test]
    fn test_format_layout() {
        let divider = "-".repeat(60);
        let expected = format!(
            "=== MODEL A (anthropic/claude-sonnet-4) ===\nQuicksort picks a pivot.\n\n{divider}\n\n\
             === MODEL B (openai/gpt-4o) ===\nPartition, then recurse.\n\n{divider}\n\n\
             === Metadata ===\nTimestamp: 2026-10-18T09:30:00.123Z\n\
             Models: anthropic/claude-sonnet-4, openai/gpt-4o\nSystem prompt: be brief"
        );
        assert_eq!(TextFormatter::format(&result()), expected);
    }

    #[test]
    fn test_content_is_verbatim() {
        let backend = Backend::new("solo", "x/y");
        let content = "line one\n\n```rust\nfn main() {}\n```\n";
        let result = DispatchResult::new(
            vec![ModelResponse::new(backend.clone(), content)],
            DispatchMetadata::new("t", vec![backend], "s"),
        );

        let text = TextFormatter::format(&result);
        assert!(text.starts_with("=== SOLO (x/y) ===\n"));
        assert!(text.contains(content));
    }

    #[test]
    fn test_divider_width() {
        assert_eq!(TextFormatter::divider().chars().count(), 60);
        assert!(TextFormatter::divider().chars().all(|c| c == '-'));
    }
}
