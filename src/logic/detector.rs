//! Detector Facade
//!
//! The two public entry points (`detect_fake_news`, `detect_scam`) plus the
//! combined `analyze` triage. Each call is a pure function of its input
//! text, the compiled rule tables and the loaded model artifacts; nothing
//! is mutated during scoring, so concurrent calls need no coordination.

use crate::constants;
use crate::logic::features::FeatureExtractor;
use crate::logic::heuristics::{news, reasons, scam, PhraseMatchers};
use crate::logic::lexicon::{LexiconError, RuleTables};
use crate::logic::model::{Task, REGISTRY};
use crate::logic::normalize::normalize;
use crate::logic::scam_type::identify_scam_type;
use crate::logic::url_intel::{extract_url_info, fetch};
use crate::logic::verdict::rules::{
    VerdictThresholds, NEWS_HEURISTIC_WEIGHT, NEWS_ML_WEIGHT, SCAM_HEURISTIC_WEIGHT,
    SCAM_ML_WEIGHT,
};
use crate::logic::verdict::types::{
    AlertLevel, AnalysisDetails, DetectionResult, NewsDetails, ScamDetails, TriageReport,
    Verdict,
};
use crate::logic::verdict::{assign_verdict, fuse};

/// Alert routing requires this much confidence on a fake verdict
const ALERT_CONFIDENCE_MIN: f32 = 0.7;

// ============================================================================
// CONFIG
// ============================================================================

/// Runtime knobs for one detector instance
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Attempt the best-effort article fetch for messages with URLs
    pub fetch_articles: bool,
    pub thresholds: VerdictThresholds,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            fetch_articles: constants::article_fetch_enabled(),
            thresholds: VerdictThresholds::default(),
        }
    }
}

// ============================================================================
// DETECTOR
// ============================================================================

/// Message triage detector with compiled rule tables
pub struct Detector {
    tables: RuleTables,
    config: DetectorConfig,
    extractor: FeatureExtractor,
    matchers: PhraseMatchers,
}

impl Detector {
    /// Detector with the built-in rule tables.
    pub fn new() -> Self {
        Self::with_tables(RuleTables::default(), DetectorConfig::default())
            .expect("built-in rule tables compile")
    }

    /// Detector with caller-supplied rule tables.
    pub fn with_tables(tables: RuleTables, config: DetectorConfig) -> Result<Self, LexiconError> {
        let extractor = FeatureExtractor::new(&tables)?;
        let matchers = PhraseMatchers::new(&tables)?;
        Ok(Self {
            tables,
            config,
            extractor,
            matchers,
        })
    }

    /// Classify a message as fake news / suspicious / real.
    pub fn detect_fake_news(&self, text: &str) -> DetectionResult {
        let normalized = normalize(text);
        let features = self.extractor.extract(text);

        let mut url_info = extract_url_info(text, &self.tables);
        if self.config.fetch_articles {
            if let Some(info) = url_info.as_mut() {
                if let Some(first) = info.urls.first().cloned() {
                    info.article_content = fetch::fetch_article(&first, constants::fetch_timeout());
                }
            }
        }

        let ml_confidence = REGISTRY.classify(&normalized, Task::News);
        let heuristic_score = news::news_score(
            text,
            &features,
            url_info.as_ref(),
            &self.tables,
            &self.matchers,
        );

        let final_score = fuse(
            ml_confidence,
            heuristic_score,
            NEWS_ML_WEIGHT,
            NEWS_HEURISTIC_WEIGHT,
        );
        let fused = assign_verdict(final_score, &self.config.thresholds);

        let reasons = reasons::news_reasons(
            text,
            &features,
            url_info.as_ref(),
            fused.verdict,
            &self.tables,
        );

        DetectionResult {
            verdict: fused.verdict,
            confidence: fused.confidence,
            details: AnalysisDetails::News(NewsDetails {
                ml_confidence,
                heuristic_score,
                features,
                url_analysis: url_info,
                reasons,
            }),
        }
    }

    /// Classify a message as a scam / suspicious / real.
    pub fn detect_scam(&self, text: &str) -> DetectionResult {
        let normalized = normalize(text);
        let features = self.extractor.extract(text);

        let ml_confidence = REGISTRY.classify(&normalized, Task::Scam);
        let scam_score = scam::scam_score(text, &features, &self.matchers);

        let final_score = fuse(
            ml_confidence,
            scam_score,
            SCAM_ML_WEIGHT,
            SCAM_HEURISTIC_WEIGHT,
        );
        let fused = assign_verdict(final_score, &self.config.thresholds);

        let scam_type = identify_scam_type(text, &self.tables);
        let reasons = reasons::scam_reasons(&features, scam_type);

        DetectionResult {
            verdict: fused.verdict,
            confidence: fused.confidence,
            details: AnalysisDetails::Scam(ScamDetails {
                ml_confidence,
                scam_score,
                features,
                scam_type,
                reasons,
            }),
        }
    }

    /// Run both detectors and route the combined severity.
    ///
    /// Scam alerts outrank fake-news alerts; a suspicious verdict on either
    /// task outranks safe.
    pub fn analyze(&self, text: &str) -> TriageReport {
        let news = self.detect_fake_news(text);
        let scam = self.detect_scam(text);

        let alert = if scam.verdict == Verdict::Fake && scam.confidence > ALERT_CONFIDENCE_MIN {
            AlertLevel::ScamAlert
        } else if news.verdict == Verdict::Fake && news.confidence > ALERT_CONFIDENCE_MIN {
            AlertLevel::FakeNewsAlert
        } else if scam.verdict == Verdict::Suspicious || news.verdict == Verdict::Suspicious {
            AlertLevel::Suspicious
        } else {
            AlertLevel::Safe
        };

        TriageReport { news, scam, alert }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
