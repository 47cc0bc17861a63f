//! Scam Heuristic
//!
//! Rule-based scam scoring. The keyword-density term is intentionally
//! uncapped before the final clamp: high keyword density saturates the
//! score at 1.0.

use super::PhraseMatchers;
use crate::logic::features::FeatureRecord;

/// Score a message for scam signals, clamped to [0, 1].
pub fn scam_score(text: &str, features: &FeatureRecord, matchers: &PhraseMatchers) -> f32 {
    let mut score = 0.0f32;

    // Urgency pressure
    if matchers.urgency.is_match(text) {
        score += 0.15;
    }

    // Money bait
    if matchers.money.is_match(text) {
        score += 0.1;
    }

    // Personal-information requests
    if matchers.personal_info.is_match(text) {
        score += 0.2;
    }

    // Overly positive tone
    if features.sentiment_polarity > 0.8 {
        score += 0.1;
    }

    // Keyword density, uncapped before the clamp
    score += features.scam_keyword_ratio * 2.0;

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FeatureExtractor;
    use crate::logic::lexicon::RuleTables;

    fn score_with_defaults(text: &str) -> f32 {
        let tables = RuleTables::default();
        let matchers = PhraseMatchers::new(&tables).unwrap();
        let features = FeatureExtractor::new(&tables).unwrap().extract(text);
        scam_score(text, &features, &matchers)
    }

    #[test]
    fn test_benign_text_scores_zero() {
        assert_eq!(score_with_defaults("see you at the meeting tomorrow"), 0.0);
    }

    #[test]
    fn test_urgency_delta() {
        let score = score_with_defaults("please respond immediately");
        assert!((score - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_personal_info_request_weighs_most() {
        let score = score_with_defaults("confirm the password for me");
        // personal info 0.2 + keyword "password" ratio 1/5 * 2 = 0.4
        assert!((score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_urgency_short_circuits() {
        // Two urgency phrases still contribute a single 0.15
        let one = score_with_defaults("reply immediately please people");
        let two = score_with_defaults("reply immediately asap please");
        assert!((one - 0.15).abs() < 1e-6);
        assert!((two - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_keyword_density_saturates() {
        // Dense keyword text drives the uncapped term past 1.0; the final
        // clamp keeps the score there
        let score = score_with_defaults("urgent winner prize lottery");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_score_within_unit_interval() {
        for text in [
            "",
            "act now to claim your cash prize, verify your bank account",
            "WIN A FREE PRIZE NOW!!! Click http://bit.ly/xyz",
        ] {
            let score = score_with_defaults(text);
            assert!((0.0..=1.0).contains(&score), "{:?}", text);
        }
    }
}
