//! Expected-output extraction from companion plan files.
//!
//! A plan file may carry a section such as
//!
//! ````text
//! ## Expected Output
//!
//! ```
//! [main] logger @0x7f1234...
//! ```
//! ````
//!
//! The first fenced block directly following an `## Expected…` (or `## 預期…`)
//! header is taken as the topic's expected output.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_EXPECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)##\s*(?:expected|預期)[^\n]*\n+```(?:\w+)?\n(.*?)```").unwrap()
});

/// Lookup of a topic's expected output by its declared source.
pub trait ExpectedOutputSource {
    /// Returns `None` when the source is missing or yields nothing usable.
    fn expected_output(&self, source: &str) -> Option<String>;
}

/// Plan files resolved against the project root.
pub struct PlanFiles {
    pub root: PathBuf,
}

impl ExpectedOutputSource for PlanFiles {
    fn expected_output(&self, source: &str) -> Option<String> {
        extract_expected_output(&self.root.join(source))
    }
}

/// Read `path` and extract its expected-output block.
///
/// Missing files yield `None` silently. Files that exist but cannot be read
/// yield `None` with a warning on stderr.
pub fn extract_expected_output(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => find_expected_output(&content),
        Err(e) => {
            eprintln!("warning: skipping {}: {}", path.display(), e);
            None
        }
    }
}

/// Extract the trimmed body of the first expected-output block in `content`.
///
/// `\r\n` and lone `\r` line endings are read as `\n`. A block that is
/// empty after trimming counts as not found.
pub fn find_expected_output(content: &str) -> Option<String> {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let caps = RE_EXPECTED.captures(&content)?;
    let body = caps[1].trim();
    if body.is_empty() {
        return None;
    }
    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn plain_block() {
        assert_eq!(
            find_expected_output("## Expected Output\n\n```\ntext\n```"),
            Some("text".to_string())
        );
    }

    #[test]
    fn crlf_plan() {
        assert_eq!(
            find_expected_output("## Expected Output\r\n\r\n```\r\nwin\r\n```\r\n"),
            Some("win".to_string())
        );
    }

    #[test]
    fn crlf_block_keeps_inner_lines() {
        let plan = "# Plan\r\n## Expected Output\r\n```text\r\n[main] 0x1\r\n[lib] 0x1\r\n```\r\n";
        assert_eq!(
            find_expected_output(plan),
            Some("[main] 0x1\n[lib] 0x1".to_string())
        );
    }

    #[test]
    fn crlf_plan_file_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.md");
        fs::write(&path, "## Expected Output\r\n\r\n```\r\nfrom windows\r\n```\r\n").unwrap();
        assert_eq!(extract_expected_output(&path), Some("from windows".to_string()));
    }

    #[test]
    fn block_with_language_tag() {
        let plan = "# Plan\n\n## Expected output\n```text\n[main] 0x1\n[lib] 0x1\n```\n";
        assert_eq!(
            find_expected_output(plan),
            Some("[main] 0x1\n[lib] 0x1".to_string())
        );
    }

    #[test]
    fn header_is_case_insensitive() {
        assert_eq!(
            find_expected_output("##EXPECTED RESULT\n```\nok\n```"),
            Some("ok".to_string())
        );
    }

    #[test]
    fn localized_header() {
        let plan = "## 預期結果\n\n```\n[user_a] inline: 0x404180\n```\n";
        assert_eq!(
            find_expected_output(plan),
            Some("[user_a] inline: 0x404180".to_string())
        );
    }

    #[test]
    fn only_first_match_is_used() {
        let plan = "## Expected Output\n\n```\nfirst\n```\n\n## Expected Output (again)\n\n```\nsecond\n```\n";
        assert_eq!(find_expected_output(plan), Some("first".to_string()));
    }

    #[test]
    fn no_header() {
        assert_eq!(find_expected_output("# Plan\n\n```\nsome code\n```\n"), None);
    }

    #[test]
    fn header_without_fence() {
        assert_eq!(
            find_expected_output("## Expected Output\n\nThe addresses should match.\n"),
            None
        );
    }

    #[test]
    fn prose_between_header_and_fence() {
        let plan = "## Expected Output\nRun it:\n```\nout\n```\n";
        assert_eq!(find_expected_output(plan), None);
    }

    #[test]
    fn empty_block_counts_as_missing() {
        assert_eq!(find_expected_output("## Expected Output\n\n```\n  \n```"), None);
    }

    #[test]
    fn empty_content() {
        assert_eq!(find_expected_output(""), None);
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(extract_expected_output(&dir.path().join("plan.md")), None);
    }

    #[test]
    fn directory_is_not_a_plan() {
        let dir = TempDir::new().unwrap();
        assert_eq!(extract_expected_output(dir.path()), None);
    }

    #[test]
    fn plan_files_resolve_against_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("tu_scope")).unwrap();
        fs::write(
            dir.path().join("tu_scope/plan.md"),
            "## Expected Output\n\n```\nfrom plan\n```\n",
        )
        .unwrap();

        let plans = PlanFiles {
            root: dir.path().to_path_buf(),
        };
        assert_eq!(
            plans.expected_output("tu_scope/plan.md"),
            Some("from plan".to_string())
        );
        assert_eq!(plans.expected_output("dso_scope/plan.md"), None);
    }
}
