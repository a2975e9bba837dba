//! Per-topic section rendering.

use super::{capitalize, code_block, number_word, output_block};
use crate::extract::ExpectedOutputSource;
use crate::model::*;

/// Render one topic as section `number` of the report.
pub fn render_topic(topic: &Topic, number: usize, source: &dyn ExpectedOutputSource) -> String {
    let output = resolve_expected_output(&topic.expected_output, source);
    match topic.body {
        TopicBody::Simple { key_code } => render_simple(topic, key_code, number, &output),
        TopicBody::Variants(variants) => render_variants(topic, variants, number, &output),
    }
}

/// Extracted output when the topic declares a source and it yields something,
/// otherwise the embedded fallback.
fn resolve_expected_output(expected: &ExpectedOutput, source: &dyn ExpectedOutputSource) -> String {
    expected
        .source
        .and_then(|s| source.expected_output(s))
        .unwrap_or_else(|| expected.fallback.to_string())
}

fn heading(topic: &Topic, number: usize) -> String {
    format!("## {}. Level {}: {}", number, topic.level, topic.title)
}

fn render_simple(topic: &Topic, key_code: &[CodeSnippet], number: usize, output: &str) -> String {
    let mut lines = vec![
        heading(topic, number),
        String::new(),
        "### Problem".to_string(),
        String::new(),
        topic.problem.to_string(),
        String::new(),
        "### Mechanism".to_string(),
        String::new(),
        topic.mechanism.to_string(),
        String::new(),
        "### Key Code".to_string(),
    ];
    push_snippets(&mut lines, key_code);

    lines.push("\n### Expected Output\n".to_string());
    lines.push(output_block(output));

    lines.join("\n")
}

fn render_variants(topic: &Topic, variants: &[Variant], number: usize, output: &str) -> String {
    let mut lines = vec![
        heading(topic, number),
        String::new(),
        "### Problem".to_string(),
        String::new(),
        topic.problem.to_string(),
        String::new(),
        "### Why Needed".to_string(),
        String::new(),
        topic.concept.to_string(),
        String::new(),
        format!(
            "### {} Implementation Patterns",
            capitalize(&number_word(variants.len()))
        ),
    ];

    for variant in variants {
        lines.push(format!("\n#### {}\n", variant.title));
        lines.push(format!("**Concept:** {}\n", variant.concept));
        push_snippets(&mut lines, variant.key_code);
        lines.push(format!("\n- **Pros:** {}", variant.pros));
        lines.push(format!("- **Cons:** {}", variant.cons));
    }

    // Shared by every variant
    lines.push("\n### Expected Output (All Variants)\n".to_string());
    lines.push(output_block(output));

    lines.join("\n")
}

fn push_snippets(lines: &mut Vec<String>, snippets: &[CodeSnippet]) {
    for item in snippets {
        lines.push(format!("\n**{}**\n", item.description));
        lines.push(code_block(item.snippet));
    }
}
