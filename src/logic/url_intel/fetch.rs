//! Best-Effort Article Fetch
//!
//! Optional enrichment side channel: a plain GET against the first URL,
//! bounded by a timeout, with the paragraph text of the response truncated
//! to a fixed excerpt. Every failure mode (network, status, parse) is
//! swallowed into `None` - this path must never block or fail a detection.

use scraper::{Html, Selector};
use std::time::Duration;

use crate::constants::ARTICLE_CONTENT_LIMIT;

/// Fetch and extract up to [`ARTICLE_CONTENT_LIMIT`] chars of article text.
pub fn fetch_article(url: &str, timeout: Duration) -> Option<String> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .build();

    let body = match agent.get(url).call() {
        Ok(response) => match response.into_string() {
            Ok(body) => body,
            Err(e) => {
                log::debug!("article body read failed for {}: {}", url, e);
                return None;
            }
        },
        Err(e) => {
            log::debug!("article fetch failed for {}: {}", url, e);
            return None;
        }
    };

    let text = extract_paragraph_text(&body)?;
    Some(text.chars().take(ARTICLE_CONTENT_LIMIT).collect())
}

/// Join the `<p>` text of an HTML document; None when there is none.
fn extract_paragraph_text(html: &str) -> Option<String> {
    let selector = Selector::parse("p").ok()?;
    let document = Html::parse_document(html);

    let joined = document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .filter(|t| !t.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_extraction() {
        let html = "<html><body><h1>Title</h1><p>First.</p><p>Second.</p></body></html>";
        assert_eq!(extract_paragraph_text(html).as_deref(), Some("First. Second."));
    }

    #[test]
    fn test_no_paragraphs_yields_none() {
        assert!(extract_paragraph_text("<html><body><div>x</div></body></html>").is_none());
        assert!(extract_paragraph_text("").is_none());
    }

    #[test]
    fn test_fetch_failure_is_swallowed() {
        // Unroutable address: must return None, never panic or propagate
        let result = fetch_article("http://127.0.0.1:1/none", Duration::from_millis(200));
        assert!(result.is_none());
    }
}
