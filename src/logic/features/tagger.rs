//! Lexical Tagger
//!
//! Rule/lexicon part-of-speech and named-entity tagging. This replaces a
//! full statistical tagger with deterministic closed-class lists, suffix
//! rules and shallow entity patterns; the counts feed the feature record,
//! not the scoring rules, so recall matters more than precision.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// PART OF SPEECH
// ============================================================================

/// Noun/verb/adjective counts for a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosCounts {
    pub noun: usize,
    pub verb: usize,
    pub adj: usize,
}

/// Closed-class words that are neither nouns, verbs nor adjectives
const FUNCTION_WORDS: &[&str] = &[
    // Determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "all",
    "both", "no",
    // Pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "who", "what", "which", "someone", "anyone", "everyone",
    // Prepositions
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under",
    // Conjunctions and particles
    "and", "or", "but", "if", "then", "than", "because", "as", "while", "so", "not", "nor",
    // Auxiliaries (tagged separately from verbs by linguistic taggers)
    "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did", "have", "has",
    "had", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    // Misc
    "there", "here", "now", "just", "also", "very", "too", "only", "out", "yes",
];

/// Common verbs the suffix rules miss (imperatives dominate scam text)
const COMMON_VERBS: &[&str] = &[
    "click", "send", "call", "get", "give", "go", "come", "make", "take", "act", "claim",
    "verify", "reply", "pay", "buy", "sell", "win", "earn", "unlock", "share", "visit", "text",
    "contact", "confirm", "update", "say", "says", "said", "grew", "rose", "fell", "report",
    "announce", "know", "think", "believe", "want", "need", "ask", "tell", "transfer",
];

/// Common adjectives without a telltale suffix
const COMMON_ADJECTIVES: &[&str] = &[
    "free", "new", "big", "small", "good", "bad", "great", "best", "worst", "urgent", "easy",
    "hard", "rich", "poor", "safe", "fake", "real", "last", "final", "limited", "special",
    "secret", "guaranteed", "exclusive", "important", "nice", "happy", "sad", "angry", "lucky",
    "shocking", "viral", "true", "false",
];

const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

fn tokenize_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('\'', "").to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Count nouns, verbs and adjectives in a text.
pub fn pos_counts(text: &str) -> PosCounts {
    let mut counts = PosCounts::default();

    for token in tokenize_words(text) {
        let word = token.as_str();

        if FUNCTION_WORDS.contains(&word) {
            continue;
        }
        // Adverbs: -ly derivations ("urgently", "immediately")
        if word.len() > 4 && word.ends_with("ly") {
            continue;
        }

        if COMMON_VERBS.contains(&word)
            || (word.len() > 4 && word.ends_with("ing"))
            || (word.len() > 3 && word.ends_with("ed"))
        {
            counts.verb += 1;
        } else if COMMON_ADJECTIVES.contains(&word)
            || ADJ_SUFFIXES.iter().any(|s| word.len() > s.len() + 1 && word.ends_with(s))
        {
            counts.adj += 1;
        } else {
            // Remaining content words default to noun
            counts.noun += 1;
        }
    }

    counts
}

// ============================================================================
// NAMED ENTITIES
// ============================================================================

/// Entity span counts for a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    pub total: usize,
    pub person: usize,
    pub org: usize,
    pub date: usize,
}

/// Month/weekday names, relative days and four-digit years
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|monday|tuesday|wednesday|thursday|friday|saturday|sunday|today|tomorrow|yesterday|(19|20)\d{2})\b",
    )
    .expect("Invalid date regex")
});

/// Capitalized name followed by a corporate suffix
static ORG_SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]+ (Inc|Corp|Corporation|Ltd|LLC|Bank|Company|Group)\b")
        .expect("Invalid org regex")
});

/// Honorific followed by a capitalized name
static PERSON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Mr|Mrs|Ms|Dr|Prof)\.? [A-Z][a-z]+\b").expect("Invalid person regex")
});

/// All-caps acronyms that are ordinary words, not organizations
const ACRONYM_STOPLIST: &[&str] = &["A", "I", "OK", "NO", "YES", "ASAP", "WIN", "FREE", "NOW"];

fn is_acronym(token: &str) -> bool {
    let len = token.chars().count();
    (2..=5).contains(&len)
        && token.chars().all(|c| c.is_ascii_uppercase())
        && !ACRONYM_STOPLIST.contains(&token)
}

/// Count shallow named-entity spans in the raw (uncased) text.
pub fn entity_counts(text: &str) -> EntityCounts {
    let date = DATE_PATTERN.find_iter(text).count();
    let person = PERSON_PATTERN.find_iter(text).count();

    let mut org = ORG_SUFFIX_PATTERN.find_iter(text).count();
    org += text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| is_acronym(w))
        .count();

    EntityCounts {
        total: date + person + org,
        person,
        org,
        date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_counts_basic() {
        let counts = pos_counts("The economy grew this quarter");
        assert_eq!(counts.verb, 1); // grew
        assert!(counts.noun >= 2); // economy, quarter
    }

    #[test]
    fn test_imperative_verbs() {
        let counts = pos_counts("Click here and claim your free prize");
        assert_eq!(counts.verb, 2); // click, claim
        assert_eq!(counts.adj, 1); // free
    }

    #[test]
    fn test_adverbs_not_counted() {
        let counts = pos_counts("act urgently");
        assert_eq!(counts.verb, 1);
        assert_eq!(counts.adj, 0);
        assert_eq!(counts.noun, 0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(pos_counts(""), PosCounts::default());
        assert_eq!(entity_counts(""), EntityCounts::default());
    }

    #[test]
    fn test_date_entities() {
        let counts = entity_counts("The meeting is on Monday, January 2024");
        assert_eq!(counts.date, 3);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_person_entities() {
        let counts = entity_counts("Dr. Smith and Mrs Jones attended");
        assert_eq!(counts.person, 2);
    }

    #[test]
    fn test_org_entities() {
        let counts = entity_counts("Acme Corp reported earnings to the IRS");
        assert_eq!(counts.org, 2); // "Acme Corp" + acronym IRS
    }

    #[test]
    fn test_total_is_sum() {
        let counts = entity_counts("Mr. Lee of Acme Bank called on Friday");
        assert_eq!(counts.total, counts.person + counts.org + counts.date);
    }
}
