//! Heuristic Scorers
//!
//! Two independent rule engines mapping features + URL intel to a score in
//! [0, 1]. Every rule contributes an additive delta; deltas are summed then
//! clamped, so accumulation order never changes the result. The paired
//! reason generators reuse the same predicates to emit explanations.

pub mod news;
pub mod reasons;
pub mod scam;

use aho_corasick::AhoCorasick;

use super::lexicon::{LexiconError, RuleTables};
use super::url_intel::UrlInfo;

// ============================================================================
// PHRASE MATCHERS
// ============================================================================

/// Compiled case-insensitive containment matchers for the phrase lists
pub struct PhraseMatchers {
    pub sensational: AhoCorasick,
    pub urgency: AhoCorasick,
    pub money: AhoCorasick,
    pub personal_info: AhoCorasick,
    pub attribution: AhoCorasick,
}

impl PhraseMatchers {
    pub fn new(tables: &RuleTables) -> Result<Self, LexiconError> {
        fn build(name: &str, patterns: &[String]) -> Result<AhoCorasick, LexiconError> {
            AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(patterns)
                .map_err(|e| LexiconError(format!("{} matcher: {}", name, e)))
        }

        Ok(Self {
            sensational: build("sensational", &tables.sensational_phrases)?,
            urgency: build("urgency", &tables.urgency_phrases)?,
            money: build("money", &tables.money_terms)?,
            personal_info: build("personal info", &tables.personal_info_terms)?,
            attribution: build("attribution", &tables.attribution_phrases)?,
        })
    }
}

// ============================================================================
// DOMAIN CREDIBILITY
// ============================================================================

/// Domain classification for the news heuristic, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainCredibility {
    Trusted,
    Satire,
    Shortened,
}

impl DomainCredibility {
    /// Additive score delta for the news heuristic
    pub fn score_delta(&self) -> f32 {
        match self {
            DomainCredibility::Trusted => -0.3,
            DomainCredibility::Satire => 0.4,
            DomainCredibility::Shortened => 0.2,
        }
    }
}

/// Classify the analyzed domain, first match in priority order
/// trusted > satire > shortened. None when there is no domain to judge.
pub fn classify_domain(url_info: &UrlInfo, tables: &RuleTables) -> Option<DomainCredibility> {
    let domain = url_info.domain.as_deref()?;

    if tables.trusted_sources.iter().any(|s| domain.contains(s.as_str())) {
        Some(DomainCredibility::Trusted)
    } else if tables.satire_sites.iter().any(|s| domain.contains(s.as_str())) {
        Some(DomainCredibility::Satire)
    } else if url_info.is_shortened {
        Some(DomainCredibility::Shortened)
    } else {
        None
    }
}
