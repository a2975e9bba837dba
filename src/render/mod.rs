//! Markdown rendering of report sections.

pub mod sections;
pub mod topic;

/// Language tag for key-code fences.
const CODE_LANG: &str = "cpp";

/// Wrap a code snippet in a fenced block tagged with [`CODE_LANG`].
fn code_block(code: &str) -> String {
    format!("```{}\n{}\n```", CODE_LANG, code.trim())
}

/// Wrap program output in an untagged fenced block.
fn output_block(output: &str) -> String {
    format!("```\n{}\n```", output.trim())
}

/// English word for small counts ("four"), digits otherwise.
fn number_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(n)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_block_trims_and_tags() {
        assert_eq!(code_block("\nint x;\n\n"), "```cpp\nint x;\n```");
    }

    #[test]
    fn output_block_untagged() {
        assert_eq!(output_block("  ok  "), "```\nok\n```");
    }

    #[test]
    fn number_words() {
        assert_eq!(number_word(4), "four");
        assert_eq!(number_word(12), "12");
        assert_eq!(capitalize(&number_word(5)), "Five");
        assert_eq!(capitalize(""), "");
    }
}
