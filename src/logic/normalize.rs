//! Text Normalizer
//!
//! Pure, deterministic cleanup applied before vectorization:
//! lowercase, strip URLs, strip punctuation and digits, collapse whitespace.
//! Empty input yields empty output - there are no failure modes here.

use once_cell::sync::Lazy;
use regex::Regex;

/// URL-like substrings (scheme or bare www prefix)
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\S+").expect("Invalid URL strip regex"));

/// Anything that is not a word character or whitespace
static NON_WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid non-word regex"));

/// Digit runs
static DIGIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("Invalid digit regex"));

/// Normalize raw message text for the vectorizer.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_urls = URL_PATTERN.replace_all(&lowered, "");
    let no_punct = NON_WORD_PATTERN.replace_all(&no_urls, "");
    let no_digits = DIGIT_PATTERN.replace_all(&no_punct, "");

    // Collapse whitespace runs and trim
    no_digits.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            normalize("check https://example.com/a?b=1 now"),
            "check now"
        );
        assert_eq!(normalize("see www.example.com today"), "see today");
    }

    #[test]
    fn test_strips_digits() {
        assert_eq!(normalize("call 555 1234 now"), "call now");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  a   b \t c  "), "a b c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_only_noise_yields_empty() {
        assert_eq!(normalize("!!! 123 ???"), "");
    }
}
