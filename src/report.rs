//! Report assembly and output.

use crate::extract::ExpectedOutputSource;
use crate::model::Topic;
use crate::render::{sections, topic};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Size figures printed after a successful write.
#[derive(Debug, PartialEq, Eq)]
pub struct ReportStats {
    pub chars: usize,
    pub lines: usize,
}

impl ReportStats {
    pub fn of(report: &str) -> Self {
        ReportStats {
            chars: report.chars().count(),
            lines: report.matches('\n').count(),
        }
    }
}

/// Build the full report: overview, one section per topic in ascending
/// level order, comparison table, takeaways.
///
/// Section numbers are handed out sequentially starting at 1.
pub fn assemble(topics: &[Topic], source: &dyn ExpectedOutputSource) -> String {
    let mut ordered: Vec<&Topic> = topics.iter().collect();
    ordered.sort_by_key(|t| t.level);

    let mut number = 1;
    let mut parts = vec![sections::overview(number, &ordered)];
    for t in &ordered {
        number += 1;
        parts.push(topic::render_topic(t, number, source));
    }
    parts.push(sections::comparison_table(number + 1, &ordered));
    parts.push(sections::takeaways(number + 2));

    parts.join("\n\n")
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &str) -> Result<ReportStats> {
    fs::write(path, report).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(ReportStats::of(report))
}

/// Format a count with comma thousands separators: 12345 → "12,345".
///
/// Digits are grouped in threes from the right.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let groups: Vec<&str> = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TOPICS;
    use crate::model::*;
    use tempfile::TempDir;

    struct NoPlans;

    impl ExpectedOutputSource for NoPlans {
        fn expected_output(&self, _source: &str) -> Option<String> {
            None
        }
    }

    fn headings(report: &str) -> Vec<&str> {
        report.lines().filter(|l| l.starts_with("## ")).collect()
    }

    fn topic(level: u8, title: &'static str) -> Topic {
        Topic {
            level,
            key: "scope",
            title,
            summary: "summary",
            problem: "problem",
            concept: "concept",
            mechanism: "mechanism",
            expected_output: ExpectedOutput {
                source: None,
                fallback: "out",
            },
            comparison: ComparisonRow {
                mechanism: "m",
                feature: "f",
                guarantee: "g",
            },
            body: TopicBody::Simple { key_code: &[] },
        }
    }

    #[test]
    fn catalog_report_headings() {
        let report = assemble(TOPICS, &NoPlans);
        assert_eq!(
            headings(&report),
            vec![
                "## 1. Overview",
                "## 2. Level 1: Translation Unit Scope",
                "## 3. Level 2: Dynamic Shared Object Scope",
                "## 4. Level 3: Thread-Local Scope",
                "## 5. Level 4: Process Scope",
                "## 6. Level 5: OS (Machine-Wide) Scope",
                "## 7. Comparison Table",
                "## 8. Key Takeaways",
            ]
        );
    }

    #[test]
    fn order_follows_level_not_storage() {
        let shuffled = [
            topic(3, "Third"),
            topic(1, "First"),
            topic(5, "Fifth"),
            topic(2, "Second"),
            topic(4, "Fourth"),
        ];
        let report = assemble(&shuffled, &NoPlans);
        let titles: Vec<&str> = headings(&report)
            .into_iter()
            .filter(|h| h.contains("Level"))
            .collect();
        assert_eq!(
            titles,
            vec![
                "## 2. Level 1: First",
                "## 3. Level 2: Second",
                "## 4. Level 3: Third",
                "## 5. Level 4: Fourth",
                "## 6. Level 5: Fifth",
            ]
        );
    }

    #[test]
    fn numbering_follows_topic_count() {
        let report = assemble(&[topic(1, "Only")], &NoPlans);
        assert_eq!(
            headings(&report),
            vec![
                "## 1. Overview",
                "## 2. Level 1: Only",
                "## 3. Comparison Table",
                "## 4. Key Takeaways",
            ]
        );
    }

    #[test]
    fn sections_separated_by_blank_line() {
        let report = assemble(TOPICS, &NoPlans);
        assert!(report.contains("\n\n## 2. Level 1: Translation Unit Scope\n"));
        assert!(report.contains("```\n\n## 7. Comparison Table\n"));
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn assemble_is_deterministic() {
        assert_eq!(assemble(TOPICS, &NoPlans), assemble(TOPICS, &NoPlans));
    }

    #[test]
    fn stats_count_chars_and_newlines() {
        assert_eq!(
            ReportStats::of("a→b\nc\n"),
            ReportStats { chars: 6, lines: 2 }
        );
    }

    #[test]
    fn write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        fs::write(&path, "old content that is longer").unwrap();

        let stats = write_report(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(stats, ReportStats { chars: 3, lines: 0 });
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.md");
        let err = write_report(&path, "x").unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
