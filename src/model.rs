//! Data model for the report catalog — format-agnostic.

/// One documented singleton scope level.
#[derive(Debug)]
pub struct Topic {
    /// Scope level, 1 (narrowest) to 5 (machine-wide)
    pub level: u8,
    /// Directory-style identifier, e.g. `tu_scope`
    pub key: &'static str,
    pub title: &'static str,
    /// One-line entry for the overview's level list
    pub summary: &'static str,
    pub problem: &'static str,
    pub concept: &'static str,
    pub mechanism: &'static str,
    pub expected_output: ExpectedOutput,
    pub comparison: ComparisonRow,
    pub body: TopicBody,
}

/// Shape of a topic's main content.
#[derive(Debug)]
pub enum TopicBody {
    /// Mechanism text followed by its key code snippets
    Simple { key_code: &'static [CodeSnippet] },
    /// Several alternative strategies sharing one expected output
    Variants(&'static [Variant]),
}

/// One implementation strategy of a multi-variant topic.
#[derive(Debug)]
pub struct Variant {
    pub title: &'static str,
    pub concept: &'static str,
    pub key_code: &'static [CodeSnippet],
    pub pros: &'static str,
    pub cons: &'static str,
}

#[derive(Debug)]
pub struct CodeSnippet {
    pub description: &'static str,
    pub snippet: &'static str,
}

/// Where a topic's expected program output comes from.
#[derive(Debug)]
pub struct ExpectedOutput {
    /// Plan file relative to the project root, scanned for an expected-output block
    pub source: Option<&'static str>,
    /// Embedded text used when the source is absent or yields nothing
    pub fallback: &'static str,
}

/// Row of the cross-topic comparison table.
#[derive(Debug)]
pub struct ComparisonRow {
    pub mechanism: &'static str,
    pub feature: &'static str,
    pub guarantee: &'static str,
}
