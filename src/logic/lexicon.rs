//! Rule Tables
//!
//! Every keyword, phrase and domain list the heuristics consume, modeled as
//! versionable configuration data rather than literals scattered through the
//! scoring code. Ordering matters: the scam-type rules and the domain lists
//! are walked first-match-wins, so reordering a list is the only way to
//! change rule priority.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::verdict::types::ScamType;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Failure while loading or compiling rule tables
#[derive(Debug)]
pub struct LexiconError(pub String);

impl std::fmt::Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LexiconError: {}", self.0)
    }
}

impl std::error::Error for LexiconError {}

// ============================================================================
// SCAM TYPE RULE
// ============================================================================

/// One entry of the ordered scam-type rule table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScamTypeRule {
    /// Any of these (case-insensitive substring) triggers the rule
    pub keywords: Vec<String>,
    pub scam_type: ScamType,
}

// ============================================================================
// RULE TABLES
// ============================================================================

/// Keyword/domain configuration for both heuristic scorers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTables {
    /// Keywords counted by the feature extractor (substring containment)
    pub scam_keywords: Vec<String>,
    /// Credible news domains (score reduction)
    pub trusted_sources: Vec<String>,
    /// Known satire domains (strong fake-news signal)
    pub satire_sites: Vec<String>,
    /// Link-shortening service hostnames
    pub shortening_services: Vec<String>,
    /// Sensational/clickbait phrases (news heuristic)
    pub sensational_phrases: Vec<String>,
    /// Urgency phrases (scam heuristic)
    pub urgency_phrases: Vec<String>,
    /// Money-related terms (scam heuristic)
    pub money_terms: Vec<String>,
    /// Personal-information request terms (scam heuristic)
    pub personal_info_terms: Vec<String>,
    /// Attribution phrases whose absence raises the news score
    pub attribution_phrases: Vec<String>,
    /// Ordered first-match-wins scam-type rules
    pub scam_type_rules: Vec<ScamTypeRule>,
}

impl Default for RuleTables {
    fn default() -> Self {
        fn list(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            scam_keywords: list(&[
                "urgent", "winner", "prize", "lottery", "bank account",
                "verify", "password", "credit card", "ssn", "social security",
                "inheritance", "wire transfer", "gift card", "bitcoin",
                "western union", "money gram", "tax refund", "irs",
                "unlock", "limited time", "act now", "guaranteed",
            ]),
            trusted_sources: list(&[
                "reuters.com", "apnews.com", "bbc.com", "bbc.co.uk",
                "cnn.com", "nytimes.com", "wsj.com", "washingtonpost.com",
                "theguardian.com", "npr.org", "politico.com", "economist.com",
            ]),
            satire_sites: list(&[
                "theonion.com", "clickhole.com", "babylonbee.com",
                "thebeaverton.com", "fakingnews.com",
            ]),
            shortening_services: list(&["bit.ly", "tinyurl", "goo.gl", "ow.ly", "is.gd"]),
            sensational_phrases: list(&[
                "shocking", "unbelievable", "mind-blowing", "you won't believe", "viral",
            ]),
            urgency_phrases: list(&[
                "urgent", "immediately", "asap", "limited time", "act now", "today only",
            ]),
            money_terms: list(&[
                "money", "cash", "prize", "lottery", "won", "winner", "inheritance",
            ]),
            personal_info_terms: list(&[
                "ssn", "social security", "credit card", "bank account", "password",
            ]),
            attribution_phrases: list(&["according to", "sources say"]),
            scam_type_rules: vec![
                ScamTypeRule {
                    keywords: list(&["lottery", "prize", "won", "winner"]),
                    scam_type: ScamType::LotteryScam,
                },
                ScamTypeRule {
                    keywords: list(&["bank", "account", "verify", "credit card"]),
                    scam_type: ScamType::PhishingScam,
                },
                ScamTypeRule {
                    keywords: list(&["investment", "bitcoin", "crypto", "profit"]),
                    scam_type: ScamType::InvestmentScam,
                },
                ScamTypeRule {
                    keywords: list(&["romance", "love", "dating", "single"]),
                    scam_type: ScamType::RomanceScam,
                },
                ScamTypeRule {
                    keywords: list(&["inheritance", "lawyer", "diaspora"]),
                    scam_type: ScamType::AdvanceFeeScam,
                },
                ScamTypeRule {
                    keywords: list(&["tech support", "microsoft", "virus"]),
                    scam_type: ScamType::TechSupportScam,
                },
            ],
        }
    }
}

impl RuleTables {
    /// Load rule tables from a JSON file (tunable without rebuilding)
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| LexiconError(format!("read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| LexiconError(format!("parse {}: {}", path.display(), e)))
    }
}
