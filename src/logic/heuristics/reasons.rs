//! Reason Generators
//!
//! Human-readable explanations derived from the same predicates the
//! scorers use. Purely derivative - no additional scoring happens here.

use crate::logic::features::FeatureRecord;
use crate::logic::lexicon::RuleTables;
use crate::logic::url_intel::UrlInfo;
use crate::logic::verdict::types::{ScamType, Verdict};

/// Explain a fake-news verdict.
pub fn news_reasons(
    text: &str,
    features: &FeatureRecord,
    url_info: Option<&UrlInfo>,
    verdict: Verdict,
    tables: &RuleTables,
) -> Vec<String> {
    let mut reasons = Vec::new();

    match verdict {
        Verdict::Fake => {
            if let Some(domain) = url_info.and_then(|i| i.domain.as_deref()) {
                if tables.satire_sites.iter().any(|s| domain.contains(s.as_str())) {
                    reasons.push("This appears to be from a known satire website".to_string());
                } else {
                    reasons.push("The source domain has low credibility".to_string());
                }
            }

            if features.scam_keyword_count > 2 {
                reasons.push("Contains multiple scam-related keywords".to_string());
            }

            if text.contains("!!!") || text.contains("???") {
                reasons.push("Uses excessive punctuation typical of clickbait".to_string());
            }

            if features.caps_ratio > 0.3 {
                reasons.push("Unusual amount of capital letters".to_string());
            }
        }

        Verdict::Suspicious => {
            reasons.push("Some elements of the message raise concerns".to_string());
            if features.sentiment_polarity > 0.7 {
                reasons.push("The message is unusually positive/emotional".to_string());
            }
        }

        Verdict::Real => {
            if let Some(domain) = url_info.and_then(|i| i.domain.as_deref()) {
                if tables.trusted_sources.iter().any(|s| domain.contains(s.as_str())) {
                    reasons.push("Source is a trusted news organization".to_string());
                }
            }
            reasons.push("The message appears legitimate based on our analysis".to_string());
        }
    }

    reasons
}

/// Explain a scam verdict from its identified type and keyword count.
pub fn scam_reasons(features: &FeatureRecord, scam_type: ScamType) -> Vec<String> {
    let mut reasons = Vec::new();

    let typed: &[&str] = match scam_type {
        ScamType::LotteryScam => &[
            "This appears to be a lottery or prize scam",
            "Legitimate lotteries don't ask for money to release prizes",
        ],
        ScamType::PhishingScam => &[
            "This appears to be a phishing attempt",
            "Legitimate companies don't ask for sensitive info via text",
        ],
        ScamType::InvestmentScam => &[
            "This appears to be an investment scam",
            "Be wary of unsolicited investment opportunities",
        ],
        ScamType::RomanceScam => &[
            "This appears to be a romance scam",
            "Be cautious with online relationships asking for money",
        ],
        ScamType::AdvanceFeeScam => &[
            "This appears to be an advance fee scam",
            "Never pay money to receive money",
        ],
        ScamType::TechSupportScam => &[
            "This appears to be a tech support scam",
            "Legitimate companies don't contact you unsolicited",
        ],
        ScamType::GeneralScam => &[],
    };
    reasons.extend(typed.iter().map(|s| s.to_string()));

    if features.scam_keyword_count > 0 {
        reasons.push(format!(
            "Contains {} scam-related keywords",
            features.scam_keyword_count
        ));
    }

    reasons
}
