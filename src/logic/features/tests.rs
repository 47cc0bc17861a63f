//! Integration tests for the feature extraction pipeline

use super::FeatureExtractor;
use crate::logic::lexicon::RuleTables;

fn extractor() -> FeatureExtractor {
    FeatureExtractor::new(&RuleTables::default()).expect("default tables compile")
}

#[test]
fn test_basic_counts() {
    let record = extractor().extract("The economy grew this quarter. Markets reacted calmly.");
    assert_eq!(record.word_count, 8);
    assert_eq!(record.sentence_count, 2);
    assert!(record.text_length > 0);
    assert!(record.noun_count > 0);
}

#[test]
fn test_empty_text_degrades_gracefully() {
    let record = extractor().extract("");
    assert_eq!(record.text_length, 0);
    assert_eq!(record.word_count, 0);
    assert_eq!(record.sentence_count, 0);
    assert_eq!(record.scam_keyword_count, 0);
    assert_eq!(record.scam_keyword_ratio, 0.0);
    assert_eq!(record.caps_ratio, 0.0);
    assert_eq!(record.punct_ratio, 0.0);
    assert_eq!(record.sentiment_polarity, 0.0);
}

#[test]
fn test_keyword_substring_semantics() {
    // "urgent" must match inside "urgently" - containment, not tokenization
    let record = extractor().extract("please respond urgently");
    assert_eq!(record.scam_keyword_count, 1);
}

#[test]
fn test_keywords_counted_once() {
    let record = extractor().extract("urgent urgent URGENT");
    assert_eq!(record.scam_keyword_count, 1);
    assert!((record.scam_keyword_ratio - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_multiple_distinct_keywords() {
    let record = extractor().extract("You are a winner! Claim your prize with this gift card.");
    assert!(record.scam_keyword_count >= 3); // winner, prize, gift card
}

#[test]
fn test_caps_ratio() {
    let record = extractor().extract("ABCD");
    assert!((record.caps_ratio - 1.0).abs() < 1e-6);

    let record = extractor().extract("abcd");
    assert_eq!(record.caps_ratio, 0.0);
}

#[test]
fn test_punct_ratio() {
    let record = extractor().extract("!!");
    assert!((record.punct_ratio - 1.0).abs() < 1e-6);
}

#[test]
fn test_ratios_in_unit_interval() {
    for text in [
        "WIN A FREE PRIZE NOW!!! Click http://bit.ly/xyz",
        "plain text with nothing special",
        "!!!???",
        "",
    ] {
        let record = extractor().extract(text);
        assert!((0.0..=1.0).contains(&record.caps_ratio), "{:?}", text);
        assert!((0.0..=1.0).contains(&record.punct_ratio), "{:?}", text);
        assert!((0.0..=1.0).contains(&record.sentiment_subjectivity));
        assert!((-1.0..=1.0).contains(&record.sentiment_polarity));
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let ext = extractor();
    let text = "URGENT: verify your bank account at http://bit.ly/x today!";
    assert_eq!(ext.extract(text), ext.extract(text));
}
