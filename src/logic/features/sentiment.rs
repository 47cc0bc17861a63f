//! Lexicon Sentiment Scorer
//!
//! Polarity/subjectivity scoring over an embedded lexicon. Scores are the
//! mean over matched tokens only; a negator within the preceding three
//! tokens flips the polarity sign of a match. Deterministic for identical
//! input text.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (word, polarity in [-1,1], subjectivity in [0,1])
const LEXICON_ENTRIES: &[(&str, f32, f32)] = &[
    // Positive
    ("wonderful", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("awesome", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("fantastic", 0.9, 0.9),
    ("incredible", 0.9, 0.9),
    ("congratulations", 0.9, 0.9),
    ("amazing", 0.9, 0.9),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("good", 0.7, 0.6),
    ("lucky", 0.7, 0.8),
    ("exciting", 0.7, 0.9),
    ("nice", 0.6, 1.0),
    ("love", 0.5, 0.6),
    ("winner", 0.5, 0.6),
    ("guaranteed", 0.5, 0.8),
    ("free", 0.4, 0.8),
    ("won", 0.4, 0.6),
    ("win", 0.4, 0.6),
    ("rich", 0.4, 0.6),
    ("easy", 0.4, 0.8),
    ("safe", 0.5, 0.5),
    // Negative
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 0.3),
    ("disaster", -0.9, 0.9),
    ("hate", -0.8, 0.9),
    ("fraud", -0.8, 0.9),
    ("scam", -0.8, 0.9),
    ("bad", -0.7, 0.67),
    ("angry", -0.7, 0.9),
    ("shocking", -0.6, 0.9),
    ("dangerous", -0.6, 0.9),
    ("virus", -0.6, 0.8),
    ("sad", -0.5, 1.0),
    ("wrong", -0.5, 0.5),
    ("fake", -0.5, 0.6),
    ("poor", -0.4, 0.6),
    ("suspicious", -0.3, 0.8),
    ("unbelievable", -0.3, 1.0),
];

static LEXICON: Lazy<HashMap<&'static str, (f32, f32)>> = Lazy::new(|| {
    LEXICON_ENTRIES
        .iter()
        .map(|&(w, pol, subj)| (w, (pol, subj)))
        .collect()
});

/// Negators flip the polarity sign of a nearby lexicon match
const NEGATORS: &[&str] = &[
    "not", "no", "never", "isnt", "wasnt", "arent", "wont", "cant", "cannot", "dont", "without",
];

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}

/// Alphanumeric tokens, lowercased, apostrophes dropped
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('\'', "").to_lowercase())
        .collect()
}

/// Score a text, returning (polarity, subjectivity).
///
/// Texts with no lexicon matches score (0.0, 0.0).
pub fn score(text: &str) -> (f32, f32) {
    let tokens = tokenize(text);
    let mut polarity_sum = 0.0f32;
    let mut subjectivity_sum = 0.0f32;
    let mut matched = 0usize;

    for i in 0..tokens.len() {
        let Some(&(polarity, subjectivity)) = LEXICON.get(tokens[i].as_str()) else {
            continue;
        };

        let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
        polarity_sum += if negated { -polarity } else { polarity };
        subjectivity_sum += subjectivity;
        matched += 1;
    }

    if matched == 0 {
        return (0.0, 0.0);
    }

    let n = matched as f32;
    (
        (polarity_sum / n).clamp(-1.0, 1.0),
        (subjectivity_sum / n).clamp(0.0, 1.0),
    )
}
