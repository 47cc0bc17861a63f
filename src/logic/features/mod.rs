//! Feature Extractor
//!
//! Derives a fixed-size [`FeatureRecord`] from raw message text: length
//! counts, lexicon sentiment, POS/entity counts, scam-keyword density and
//! character-class ratios. Extraction is a pure function of the text plus
//! the configured keyword table; ratios use `max(.., 1)` divisors so empty
//! text degrades to a well-defined all-zero record instead of failing.

pub mod sentiment;
pub mod tagger;

#[cfg(test)]
mod tests;

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{LexiconError, RuleTables};

/// Sentence boundaries: runs of terminal punctuation
static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence split regex"));

/// Punctuation classes counted by `punct_ratio`
const PUNCT_CHARS: &str = "!?.,;:";

// ============================================================================
// FEATURE RECORD
// ============================================================================

/// Immutable per-text feature snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub text_length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Lexicon polarity in [-1, 1]
    pub sentiment_polarity: f32,
    /// Lexicon subjectivity in [0, 1]
    pub sentiment_subjectivity: f32,
    pub noun_count: usize,
    pub verb_count: usize,
    pub adj_count: usize,
    pub entity_count: usize,
    pub person_entities: usize,
    pub org_entities: usize,
    pub date_entities: usize,
    /// Distinct configured keywords present as substrings
    pub scam_keyword_count: usize,
    /// scam_keyword_count / max(word_count, 1)
    pub scam_keyword_ratio: f32,
    /// Uppercase chars / max(text_length, 1)
    pub caps_ratio: f32,
    /// Terminal/clause punctuation chars / max(text_length, 1)
    pub punct_ratio: f32,
}

// ============================================================================
// EXTRACTOR
// ============================================================================

/// Compiled keyword matcher plus extraction entry point
pub struct FeatureExtractor {
    scam_keywords: AhoCorasick,
}

impl FeatureExtractor {
    pub fn new(tables: &RuleTables) -> Result<Self, LexiconError> {
        let scam_keywords = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&tables.scam_keywords)
            .map_err(|e| LexiconError(format!("scam keyword matcher: {}", e)))?;
        Ok(Self { scam_keywords })
    }

    /// Extract the feature record for one raw (unnormalized) text.
    pub fn extract(&self, text: &str) -> FeatureRecord {
        let text_length = text.chars().count();
        let word_count = text.split_whitespace().count();
        let sentence_count = SENTENCE_SPLIT
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();

        let (sentiment_polarity, sentiment_subjectivity) = sentiment::score(text);

        let pos = tagger::pos_counts(text);
        let entities = tagger::entity_counts(text);

        // Substring containment: each configured keyword counts once no
        // matter how often (or inside which word) it appears
        let matched: HashSet<_> = self
            .scam_keywords
            .find_overlapping_iter(text)
            .map(|m| m.pattern())
            .collect();
        let scam_keyword_count = matched.len();

        let caps_count = text.chars().filter(|c| c.is_uppercase()).count();
        let punct_count = text.chars().filter(|c| PUNCT_CHARS.contains(*c)).count();

        let char_divisor = text_length.max(1) as f32;

        FeatureRecord {
            text_length,
            word_count,
            sentence_count,
            sentiment_polarity,
            sentiment_subjectivity,
            noun_count: pos.noun,
            verb_count: pos.verb,
            adj_count: pos.adj,
            entity_count: entities.total,
            person_entities: entities.person,
            org_entities: entities.org,
            date_entities: entities.date,
            scam_keyword_count,
            scam_keyword_ratio: scam_keyword_count as f32 / word_count.max(1) as f32,
            caps_ratio: caps_count as f32 / char_divisor,
            punct_ratio: punct_count as f32 / char_divisor,
        }
    }
}
