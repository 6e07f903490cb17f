//! Word collection
//!
//! Words picked from the highlighted line are appended to a per-document word
//! list and can be browsed page by page. Proper-noun references are gathered
//! from the whole document and filtered through a banned-word list.

pub mod list;
pub mod pager;
pub mod references;

use once_cell::sync::Lazy;
use regex::Regex;

pub use list::WordList;
pub use pager::WordsPager;
pub use references::{collect_references, extract_references};

/// Punctuation stripped from a picked word
static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[.,"()?:;\\]"#).unwrap());

/// Split a line into whitespace-separated words
pub fn extract_words(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Remove surrounding punctuation so the word can be looked up or saved
pub fn sanitize_word(word: &str) -> String {
    PUNCTUATION_RE.replace_all(word, "").into_owned()
}

/// Whether the word starts with an uppercase letter
pub fn is_title(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_splits_on_any_whitespace() {
        assert_eq!(extract_words("  It was\tthe best  "), vec!["It", "was", "the", "best"]);
        assert!(extract_words("   ").is_empty());
    }

    #[test]
    fn sanitize_strips_punctuation() {
        assert_eq!(sanitize_word("\"Hello,"), "Hello");
        assert_eq!(sanitize_word("(maybe?)"), "maybe");
        assert_eq!(sanitize_word("end."), "end");
        assert_eq!(sanitize_word("path\\to"), "pathto");
        assert_eq!(sanitize_word("don't"), "don't");
    }

    #[test]
    fn title_words_start_uppercase() {
        assert!(is_title("Ishmael"));
        assert!(is_title("Ángel"));
        assert!(!is_title("whale"));
        assert!(!is_title(""));
    }
}
