//! Scam-Type Classifier
//!
//! First-match-wins walk over the ordered rule table: lottery, phishing,
//! investment, romance, advance fee, tech support, then the general
//! default. Case-insensitive substring containment.

use super::lexicon::RuleTables;
use super::verdict::types::ScamType;

/// Identify the scam category of a message.
pub fn identify_scam_type(text: &str, tables: &RuleTables) -> ScamType {
    let lowered = text.to_lowercase();

    for rule in &tables.scam_type_rules {
        if rule
            .keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
        {
            return rule.scam_type;
        }
    }

    ScamType::GeneralScam
}
