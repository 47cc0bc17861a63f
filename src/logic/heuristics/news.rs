//! News Heuristic
//!
//! Rule-based fake-news scoring. Each predicate contributes a fixed delta;
//! the domain-credibility adjustment applies at most one delta per message
//! (trusted > satire > shortened).

use super::{classify_domain, PhraseMatchers};
use crate::logic::features::FeatureRecord;
use crate::logic::lexicon::RuleTables;
use crate::logic::url_intel::UrlInfo;

/// All-caps check matching `str.isupper` semantics: at least one cased
/// character and every cased character uppercase.
fn is_all_caps(word: &str) -> bool {
    let mut cased = 0;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased += 1;
        }
    }
    cased > 0
}

/// Score a message for fake-news signals, clamped to [0, 1].
pub fn news_score(
    text: &str,
    features: &FeatureRecord,
    url_info: Option<&UrlInfo>,
    tables: &RuleTables,
    matchers: &PhraseMatchers,
) -> f32 {
    let mut score = 0.0f32;

    // Sensational language
    if matchers.sensational.is_match(text) {
        score += 0.1;
    }

    // All-caps words (clickbait)
    let caps_words = text
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && is_all_caps(w))
        .count();
    if caps_words > 2 {
        score += 0.1;
    }

    // Excessive punctuation
    if text.contains("!!!") || text.contains("???") {
        score += 0.1;
    }

    // Source credibility
    if let Some(info) = url_info {
        if let Some(credibility) = classify_domain(info, tables) {
            score += credibility.score_delta();
        }
    }

    // Lack of attribution
    if !matchers.attribution.is_match(text) {
        score += 0.1;
    }

    // Emotional language
    if features.sentiment_polarity.abs() > 0.5 {
        score += 0.1;
    }

    score.clamp(0.0, 1.0)
}
