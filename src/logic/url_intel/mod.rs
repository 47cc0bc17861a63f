//! URL Inspector
//!
//! Detects embedded URLs, extracts the domain of the first one and flags
//! known link-shortening services. Later URLs in the same message are
//! recorded but not individually analyzed. Article-body enrichment lives
//! in [`fetch`] and is strictly best-effort.

pub mod fetch;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::lexicon::RuleTables;

/// http(s) URL tokens
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[A-Za-z0-9$\-_.+!*'(),%/:?=&#~@\[\]]+").expect("Invalid URL regex")
});

/// Host capture after optional www prefix
static DOMAIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://(?:www\.)?([^/]+)").expect("Invalid domain regex"));

// ============================================================================
// URL INFO
// ============================================================================

/// Analysis of the URLs embedded in one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlInfo {
    /// Every URL found, in order of appearance
    pub urls: Vec<String>,
    /// Domain of the first URL
    pub domain: Option<String>,
    /// First URL points at a known link shortener
    pub is_shortened: bool,
    /// Best-effort article body excerpt, None unless enrichment succeeded
    pub article_content: Option<String>,
}

/// Extract URL intelligence from a message, or None when no URL is present.
///
/// Only the first URL is classified; the rest are recorded in `urls`.
pub fn extract_url_info(text: &str, tables: &RuleTables) -> Option<UrlInfo> {
    let urls: Vec<String> = URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let first = urls.first()?.clone();

    let domain = DOMAIN_PATTERN
        .captures(&first)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    let is_shortened = tables
        .shortening_services
        .iter()
        .any(|service| first.contains(service.as_str()));

    Some(UrlInfo {
        urls,
        domain,
        is_shortened,
        article_content: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> RuleTables {
        RuleTables::default()
    }

    #[test]
    fn test_no_url_yields_none() {
        assert!(extract_url_info("no links here", &tables()).is_none());
        assert!(extract_url_info("", &tables()).is_none());
    }

    #[test]
    fn test_extracts_url_and_domain() {
        let info = extract_url_info("read https://reuters.com/article/x now", &tables()).unwrap();
        assert_eq!(info.urls.len(), 1);
        assert_eq!(info.domain.as_deref(), Some("reuters.com"));
        assert!(!info.is_shortened);
        assert!(info.article_content.is_none());
    }

    #[test]
    fn test_www_prefix_stripped_from_domain() {
        let info = extract_url_info("https://www.example.com/page", &tables()).unwrap();
        assert_eq!(info.domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_shortener_flagged() {
        let info = extract_url_info("click http://bit.ly/xyz", &tables()).unwrap();
        assert!(info.is_shortened);
        assert_eq!(info.domain.as_deref(), Some("bit.ly"));
    }

    #[test]
    fn test_only_first_url_analyzed() {
        let info = extract_url_info(
            "see http://bit.ly/a and https://reuters.com/b",
            &tables(),
        )
        .unwrap();
        assert_eq!(info.urls.len(), 2);
        // Domain and shortening reflect the first URL only
        assert_eq!(info.domain.as_deref(), Some("bit.ly"));
        assert!(info.is_shortened);
    }

    #[test]
    fn test_bare_domain_is_not_a_url() {
        // No scheme means no UrlInfo - "reuters.com" in prose is prose
        assert!(extract_url_info("according to reuters.com it rained", &tables()).is_none());
    }
}
